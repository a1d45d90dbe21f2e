//! Species of the built-in mechanism.
use crate::Kinetics::reaction_table::Species;

pub(super) const FIXED: [&str; 3] = ["N2", "O2", "H2O"];

pub(super) const VARIABLE: [&str; 188] = [
    // oxygen, hydrogen and nitrogen
    "O3", "O1D", "O", "OH", "HO2", "H2O2", "H2", "NO", "NO2", "NO3", "N2O5", "HNO2", "HNO3", "HNO4",
    "N2O", "CO", "CO2",
    // C1 and sulfur
    "CH4", "MO2", "MP", "CH2O", "MOH", "MENO3", "MPN", "HCOOH", "HCN", "SO2", "SO4", "DMS", "MSA",
    "OCS",
    // C2-C3
    "C2H2", "C2H4", "C2H6", "EOH", "ETO2", "ETP", "ETNO3", "ETOO", "ETHP", "ETHN", "ETHLN", "ALD2",
    "MCO3", "PAN", "MAP", "ACTA", "C3H8", "A3O2", "B3O2", "RCHO", "RCO3", "PPN", "RP", "RB3P",
    "NPRNO3", "IPRNO3", "PRPE", "PO2", "PP", "PRPN", "PRN1", "ACET", "ATO2", "ATOOH",
    // dicarbonyls and hydroxy carbonyls
    "GLYX", "GLYC", "HAC", "MGLY",
    // C4+ alkanes and ketones
    "ALK4", "R4O2", "R4P", "R4N1", "R4N2", "MEK", "KO2",
    // aromatics
    "BENZ", "TOLU", "XYLE", "BRO2", "TRO2", "XRO2", "LBRO2H", "LBRO2N", "LTRO2H", "LXRO2H", "PHEN",
    "CSL", "MCT", "NPHEN", "AROMP4", "AROMP5",
    // monoterpenes
    "MTPA", "MTPO", "LIMO", "PIO2", "LIMO2", "PIP", "MONITS", "MONITU", "HONIT",
    // isoprene
    "ISOP", "IHOO1", "IHOO4", "INO2B", "INO2D", "MVK", "MACR", "HPALD1", "HPALD2", "IDC", "IHN2",
    "IHN4", "INPB", "INPD", "IDN", "ICN", "MVKN", "MCRHN", "RIPA", "RIPD", "IEPOXA", "IEPOXD",
    "ICHE", "MACR1OO", "MACR1OOH", "MPAN", "HMML",
    // bromine
    "Br", "BrO", "HOBr", "HBr", "BrNO2", "BrNO3", "Br2", "BrCl", "CHBr3", "CH2Br2", "CH3Br",
    // chlorine
    "Cl", "ClO", "HOCl", "HCl", "ClNO2", "ClNO3", "Cl2", "OClO", "Cl2O2", "ClOO", "CH3Cl", "CH2Cl2",
    "CHCl3",
    // iodine
    "I", "IO", "OIO", "HOI", "HI", "HIO3", "I2", "INO", "IONO", "IONO2", "I2O2", "I2O3", "I2O4",
    "ICl", "IBr", "CH3I", "CH2I2", "CH2ICl", "CH2IBr",
    // aerosol-phase tracers
    "SALACL", "SALCCL", "SALAAL", "SALCAL", "BrSALA", "BrSALC", "ISALA", "ISALC", "NIT", "NITS",
    "SO4S", "AERI", "SOAGX", "SOAMG", "SOAIE", "IONITA", "MONITA",
];

pub fn fullchem_species() -> Vec<Species> {
    FIXED
        .iter()
        .map(|s| Species::fixed(s))
        .chain(VARIABLE.iter().map(|s| Species::new(s)))
        .collect()
}
