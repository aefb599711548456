//! Disulfide-bond pairing and LEaP bond-command formatting.
//!
//! Pairs cysteine SG atoms across S-S bonds and renders each pair as a
//! `bond` command for the AMBER LEaP input script format.

/// A cysteine (CYS/CYX) sulfur atom as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CysSulfur {
    pub chain: char,
    pub res_num: i32,
}

/// Pair sulfur atoms across the given bonds.
///
/// `bonds` holds index pairs into `atoms`. Each atom is paired at most once:
/// a bond touching an already-paired atom is skipped, as are self-bonds and
/// bonds with out-of-range indices. Each surviving pair is reported once with
/// the lower index first, in bond order.
pub fn disulfide_pairs(atoms: &[CysSulfur], bonds: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut paired = vec![false; atoms.len()];
    let mut pairs = Vec::new();

    for &(a, b) in bonds {
        if a == b || a >= atoms.len() || b >= atoms.len() {
            continue;
        }
        if paired[a] || paired[b] {
            continue;
        }
        paired[a] = true;
        paired[b] = true;
        pairs.push((a.min(b), a.max(b)));
    }

    pairs
}

/// Format pairs as LEaP `bond` commands.
///
/// LEaP renumbers residues internally when the input carries insertion codes
/// or restarts numbering after a chain break, so the unit is always written
/// as `X` and the residue numbers are taken verbatim from the input.
pub fn leap_bond_commands(atoms: &[CysSulfur], pairs: &[(usize, usize)]) -> Vec<String> {
    pairs
        .iter()
        .map(|&(a, b)| {
            format!(
                "bond X.{}.SG X.{}.SG",
                atoms[a].res_num, atoms[b].res_num
            )
        })
        .collect()
}
