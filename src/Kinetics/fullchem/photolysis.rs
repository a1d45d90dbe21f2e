//! Photolysis reactions. Slot `i` of the host j-value array drives reaction `J{i+1}`.
use super::r;
use crate::Kinetics::gas_rate_laws::Photolysis;
use crate::Kinetics::reaction_table::{ReactionSet, ReactionSpec};

pub const N_J_SLOTS: usize = 72;

/// (slot label, equation) in j-value order
const PHOTOLYSIS: [(&str, &str); N_J_SLOTS] = [
    ("O3 -> O1D", "O3 = O1D + O2"),
    ("O3 -> O", "O3 = O + O2"),
    ("NO2", "NO2 = NO + O"),
    ("H2O2", "H2O2 = 2 OH"),
    ("MP", "MP = CH2O + HO2 + OH"),
    ("CH2O -> HO2", "CH2O = CO + 2 HO2"),
    ("CH2O -> H2", "CH2O = H2 + CO"),
    ("HNO3", "HNO3 = OH + NO2"),
    ("HNO2", "HNO2 = OH + NO"),
    ("HNO4", "HNO4 = HO2 + NO2"),
    ("NO3 -> NO2", "NO3 = NO2 + O"),
    ("NO3 -> NO", "NO3 = NO + O2"),
    ("N2O5", "N2O5 = NO3 + NO2"),
    ("ALD2", "ALD2 = MO2 + HO2 + CO"),
    ("ACET", "ACET = MCO3 + MO2"),
    ("GLYX", "GLYX = 2 HO2 + 2 CO"),
    ("MGLY", "MGLY = MCO3 + CO + HO2"),
    ("PAN", "PAN = 0.7 MCO3 + 0.7 NO2 + 0.3 MO2 + 0.3 NO3"),
    ("Br2", "Br2 = 2 Br"),
    ("BrO", "BrO = Br + O"),
    ("HOBr", "HOBr = Br + OH"),
    ("BrNO3", "BrNO3 = Br + NO3"),
    ("Cl2", "Cl2 = 2 Cl"),
    ("ClNO2", "ClNO2 = Cl + NO2"),
    ("ClNO3", "ClNO3 = Cl + NO3"),
    ("HOCl", "HOCl = Cl + OH"),
    ("BrCl", "BrCl = Br + Cl"),
    // stratospheric and source gases
    ("O2", "O2 = 2 O"),
    ("N2O", "N2O = N2 + O1D"),
    ("OCS", "OCS = SO2 + CO"),
    ("BrNO2", "BrNO2 = Br + NO2"),
    ("ClNO3 -> ClO", "ClNO3 = ClO + NO2"),
    ("OClO", "OClO = ClO + O"),
    ("Cl2O2", "Cl2O2 = Cl + ClOO"),
    ("ClOO", "ClOO = ClO + O"),
    ("CHBr3", "CHBr3 = 3 Br + CO"),
    ("CH2Br2", "CH2Br2 = 2 Br + CH2O"),
    ("CH3Br", "CH3Br = Br + MO2"),
    ("CH3Cl", "CH3Cl = Cl + MO2"),
    ("CH2Cl2", "CH2Cl2 = 2 Cl + CH2O"),
    ("CHCl3", "CHCl3 = 3 Cl + CO"),
    // iodine
    ("I2", "I2 = 2 I"),
    ("HOI", "HOI = I + OH"),
    ("IO", "IO = I + O"),
    ("OIO", "OIO = I + O2"),
    ("INO", "INO = I + NO"),
    ("IONO", "IONO = I + NO2"),
    ("IONO2", "IONO2 = I + NO3"),
    ("I2O2", "I2O2 = I + OIO"),
    ("I2O3", "I2O3 = OIO + IO"),
    ("I2O4", "I2O4 = 2 OIO"),
    ("ICl", "ICl = I + Cl"),
    ("IBr", "IBr = I + Br"),
    ("CH3I", "CH3I = I + MO2"),
    ("CH2I2", "CH2I2 = 2 I + CH2O"),
    ("CH2ICl", "CH2ICl = I + Cl + CH2O"),
    ("CH2IBr", "CH2IBr = I + Br + CH2O"),
    // organic peroxides, carbonyls and nitrates
    ("ETP", "ETP = OH + HO2 + ALD2"),
    ("RP", "RP = OH + HO2 + RCHO"),
    ("PP", "PP = OH + HO2 + ALD2 + CH2O"),
    ("R4P", "R4P = OH + HO2 + RCHO"),
    ("ATOOH", "ATOOH = OH + MCO3 + CH2O"),
    ("RCHO", "RCHO = ETO2 + HO2 + CO"),
    ("MEK", "MEK = 0.85 MCO3 + 0.85 ETO2 + 0.15 MO2 + 0.15 RCO3"),
    ("GLYC", "GLYC = 0.9 CH2O + 1.73 HO2 + CO + 0.07 OH + 0.1 MOH"),
    ("HAC", "HAC = MCO3 + CH2O + HO2"),
    ("MVK", "MVK = 0.6 PRPE + 0.6 CO + 0.2 MCO3 + 0.2 MO2 + 0.2 RCO3"),
    ("MACR", "MACR = 0.5 MCO3 + 0.5 CH2O + 0.5 CO + 0.5 HO2 + 0.5 OH"),
    ("HPALD1", "HPALD1 = OH + HO2 + 0.5 MGLY + 0.5 GLYC + CO"),
    ("ETNO3", "ETNO3 = NO2 + HO2 + ALD2"),
    ("NPRNO3", "NPRNO3 = NO2 + HO2 + RCHO"),
    ("IPRNO3", "IPRNO3 = NO2 + HO2 + ACET"),
];

/// photolysis slots in j-value order
pub const J_SLOTS: [&str; N_J_SLOTS] = {
    let mut slots = [""; N_J_SLOTS];
    let mut i = 0;
    while i < N_J_SLOTS {
        slots[i] = PHOTOLYSIS[i].0;
        i += 1;
    }
    slots
};

pub fn photolysis_reactions() -> Vec<ReactionSpec> {
    PHOTOLYSIS
        .iter()
        .enumerate()
        .map(|(index, (_, eq))| {
            r(
                &format!("J{}", index + 1),
                eq,
                Photolysis { index, factor: 1.0 },
            )
            .in_set(ReactionSet::Photolysis)
        })
        .collect()
}
