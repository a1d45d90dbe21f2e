//! Bromine, chlorine and iodine gas-phase chemistry, including the halocarbon source gases.
use super::{ArrRow, arr, arrhenius_rows, r};
use crate::Kinetics::gas_rate_laws::*;
use crate::Kinetics::reaction_table::ReactionSpec;

const BROMINE: [ArrRow; 18] = [
    ("R400", "Br + NO3 = BrO + NO2", 1.6e-11, 0.0),
    ("R401", "Br + ALD2 = HBr + MCO3", 1.8e-11, -460.0),
    ("R402", "Br + ACET = HBr + ATO2", 1.66e-10, -7000.0),
    ("R403", "Br + C2H6 = HBr + ETO2", 2.36e-10, -6411.0),
    ("R404", "Br + C3H8 = HBr + A3O2", 8.77e-11, -4330.0),
    ("R405", "Br + BrNO3 = Br2 + NO3", 4.9e-11, 0.0),
    ("R406", "Br2 + OH = HOBr + Br", 2.1e-11, 240.0),
    ("R407", "BrO + OH = Br + HO2", 1.7e-11, 250.0),
    ("R408", "BrO + BrO = Br2 + O2", 2.8e-14, 860.0),
    ("R409", "HOBr + O = BrO + OH", 1.2e-10, -430.0),
    ("R410", "HBr + O = Br + OH", 5.8e-12, -1500.0),
    ("R411", "CHBr3 + OH = 3 Br", 9.0e-13, -360.0),
    ("R412", "CH2Br2 + OH = 2 Br", 2.0e-12, -840.0),
    ("R413", "CH3Br + OH = Br + H2O + HO2", 1.42e-12, -1150.0),
    ("R414", "Br + BrNO2 = Br2 + NO2", 5.0e-11, 0.0),
    ("R415", "BrO + MO2 = HOBr + CH2O", 4.1e-12, 0.0),
    ("R416", "BrO + O = Br + O2", 1.9e-11, 230.0),
    ("R417", "Br + H2O2 = HBr + HO2", 1.0e-11, -3000.0),
];

const CHLORINE: [ArrRow; 32] = [
    ("R420", "Cl + H2 = H2O + HCl", 3.05e-11, -2270.0),
    ("R421", "Cl + HO2 = O2 + HCl", 1.4e-11, 270.0),
    ("R422", "Cl + HO2 = OH + ClO", 3.6e-11, -375.0),
    ("R423", "Cl + H2O2 = HO2 + HCl", 1.1e-11, -980.0),
    ("R424", "Cl + CH2O = CO + HCl + HO2", 8.1e-11, -34.0),
    ("R425", "Cl + C2H6 = HCl + ETO2", 7.2e-11, -70.0),
    ("R426", "Cl + C3H8 = HCl + A3O2", 7.4e-11, 0.0),
    ("R427", "Cl + C3H8 = HCl + B3O2", 6.0e-11, 0.0),
    ("R428", "Cl + ACET = HCl + ATO2", 7.7e-11, -1000.0),
    ("R429", "Cl + ALD2 = HCl + MCO3", 7.9e-11, 0.0),
    ("R430", "Cl + MOH = HCl + CH2O + HO2", 5.5e-11, 0.0),
    ("R431", "Cl + EOH = HCl + ALD2", 9.6e-11, 0.0),
    ("R432", "Cl + ISOP = HCl + IHOO1", 7.7e-11, 500.0),
    ("R433", "Cl + ALK4 = HCl + R4O2", 2.05e-10, 0.0),
    ("R434", "Cl + PRPE = HCl + PO2", 3.6e-12, 0.0),
    ("R435", "Cl + HOCl = Cl2 + OH", 3.4e-12, -130.0),
    ("R436", "Cl + ClNO3 = Cl2 + NO3", 6.5e-12, 135.0),
    ("R437", "ClO + OH = HO2 + Cl", 7.4e-12, 270.0),
    ("R438", "ClO + OH = HCl + O2", 6.0e-13, 230.0),
    ("R439", "ClO + O = Cl + O2", 2.8e-11, 85.0),
    ("R440", "ClO + MO2 = ClOO + HO2 + CH2O", 3.3e-12, -115.0),
    ("R441", "ClO + ClO = Cl2 + O2", 1.0e-12, -1590.0),
    ("R442", "ClO + ClO = Cl + ClOO", 3.0e-11, -2450.0),
    ("R443", "ClO + ClO = OClO + Cl", 3.5e-13, -1370.0),
    ("R444", "OClO + OH = HOCl + O2", 1.4e-12, 600.0),
    ("R445", "OClO + NO = ClO + NO2", 2.5e-12, -600.0),
    ("R446", "ClO + BrO = OClO + Br", 9.5e-13, 550.0),
    ("R447", "ClO + BrO = BrCl + O2", 4.1e-13, 290.0),
    ("R448", "CH3Cl + Cl = CO + 2 HCl + HO2", 2.17e-11, -1130.0),
    ("R449", "CH2Cl2 + Cl = CO + HCl + 2 Cl + HO2", 1.24e-12, -1070.0),
    ("R450", "CHCl3 + Cl = CO + HCl + 3 Cl + HO2", 3.77e-12, -1011.0),
    ("R451", "CH3Cl + OH = Cl + HO2 + H2O", 1.96e-12, -1200.0),
];

const CHLORINE_SOURCES: [ArrRow; 4] = [
    ("R452", "CH2Cl2 + OH = 2 Cl + HO2", 1.92e-12, -880.0),
    ("R453", "CHCl3 + OH = 3 Cl + HO2", 2.2e-12, -920.0),
    ("R454", "HOCl + OH = ClO + H2O", 3.0e-12, -500.0),
    ("R455", "Cl2 + OH = HOCl + Cl", 2.6e-12, -1100.0),
];

const IODINE: [ArrRow; 31] = [
    ("R460", "I + O3 = IO + O2", 2.1e-11, -830.0),
    ("R461", "I + HO2 = HI + O2", 1.5e-11, -1090.0),
    ("R462", "I2 + OH = HOI + I", 2.1e-10, 0.0),
    ("R463", "HI + OH = I + H2O", 1.6e-11, 440.0),
    ("R464", "HOI + OH = IO + H2O", 5.0e-12, 0.0),
    ("R465", "IO + HO2 = HOI + O2", 1.3e-11, 570.0),
    ("R466", "IO + NO = I + NO2", 9.1e-12, 240.0),
    ("R467", "IO + IO = I + OIO", 5.4e-11, 180.0),
    ("R468", "IO + IO = I2O2", 2.15e-11, 180.0),
    ("R469", "OIO + OIO = I2O4", 1.5e-10, 0.0),
    ("R470", "OIO + NO = IO + NO2", 1.1e-12, 542.0),
    ("R471", "IO + OIO = I2O3", 1.5e-10, 0.0),
    ("R472", "I2O2 = 2 IO", 1.0e1, 0.0),
    ("R473", "I2O2 = OIO + I", 2.5e1, 0.0),
    ("R474", "I2O4 = 2 OIO", 3.8e-2, 0.0),
    ("R475", "INO + INO = I2 + 2 NO", 8.4e-11, -2620.0),
    ("R476", "IONO + IONO = I2 + 2 NO2", 2.9e-11, -2600.0),
    ("R477", "I2 + NO3 = I + IONO2", 1.5e-12, 0.0),
    ("R478", "IONO2 + I = I2 + NO3", 9.1e-11, -146.0),
    ("R479", "I + NO3 = IO + NO2", 1.0e-10, 0.0),
    ("R480", "HI + NO3 = I + HNO3", 1.3e-12, -1830.0),
    ("R481", "CH3I + OH = H2O + I + MO2", 2.9e-12, -1100.0),
    ("R482", "CH2I2 + OH = 2 I + HO2", 1.8e-11, -200.0),
    ("R483", "CH2ICl + OH = I + Cl + HO2", 2.3e-12, -830.0),
    ("R484", "CH2IBr + OH = I + Br + HO2", 2.4e-12, -530.0),
    ("R485", "IO + ClO = I + OClO", 2.59e-12, 280.0),
    ("R486", "IO + ClO = ICl + O2", 1.18e-12, 280.0),
    ("R487", "IO + BrO = Br + OIO", 6.7e-12, 510.0),
    ("R488", "IO + BrO = Br + I + O2", 1.4e-12, 0.0),
    ("R489", "Cl + I2 = I + ICl", 2.1e-10, 0.0),
    ("R490", "Br + I2 = I + IBr", 1.5e-11, 0.0),
];

pub fn halogen_reactions() -> Vec<ReactionSpec> {
    let mut reactions = vec![
        // bromine
        r("R85", "Br + O3 = BrO + O2", arr(1.6e-11, -780.0)),
        r("R86", "BrO + HO2 = HOBr + O2", arr(4.5e-12, 460.0)),
        r("R87", "BrO + NO = Br + NO2", arr(8.8e-12, 260.0)),
        r(
            "R88",
            "BrO + NO2 = BrNO3",
            JplFalloff::abab(5.2e-31, 3.2, 6.9e-12, 2.9, 0.6),
        ),
        r("R89", "BrO + BrO = 2 Br + O2", arr(2.4e-12, 40.0)),
        r("R90", "Br + HO2 = HBr + O2", arr(4.8e-12, -310.0)),
        r("R91", "HBr + OH = Br + H2O", arr(5.5e-12, 200.0)),
        r("R92", "Br + CH2O = HBr + HO2 + CO", arr(1.7e-11, -800.0)),
        r(
            "R418",
            "Br + NO2 = BrNO2",
            JplFalloff::abab(4.2e-31, 2.4, 2.7e-11, 0.0, 0.6),
        ),
        r("R419", "HOBr + OH = BrO + H2O", ConstantRate { k: 5.0e-13 }),
        // chlorine
        r("R93", "Cl + O3 = ClO + O2", arr(2.3e-11, -200.0)),
        r("R94", "ClO + NO = Cl + NO2", arr(6.4e-12, 290.0)),
        r("R95", "ClO + HO2 = HOCl + O2", arr(2.6e-12, 290.0)),
        r(
            "R96",
            "ClO + NO2 = ClNO3",
            JplFalloff::abab(1.8e-31, 3.4, 1.5e-11, 1.9, 0.6),
        ),
        r("R97", "Cl + CH4 = HCl + MO2", arr(7.3e-12, -1280.0)),
        r("R98", "HCl + OH = Cl + H2O", arr(1.8e-12, -250.0)),
        r("R99", "ClO + BrO = Br + Cl + O2", arr(2.3e-12, 260.0)),
        r(
            "R456",
            "ClO + ClO = Cl2O2",
            JplFalloff::abab(1.9e-32, 3.6, 3.7e-12, 1.6, 0.6),
        ),
        r(
            "R457",
            "Cl2O2 = 2 ClO",
            JplEquilibrium::acabab(2.16e-27, 8537.0, 1.9e-32, 3.6, 3.7e-12, 1.6, 0.6),
        ),
        r(
            "R458",
            "Cl + O2 = ClOO",
            JplFalloff::abab(2.2e-33, 3.1, 1.8e-10, 0.0, 0.6),
        ),
        r(
            "R459",
            "ClOO = Cl + O2",
            JplEquilibrium::acabab(6.6e-25, 2502.0, 2.2e-33, 3.1, 1.8e-10, 0.0, 0.6),
        ),
        r(
            "R491",
            "Cl + NO2 = ClNO2",
            JplFalloff::abab(1.8e-31, 2.0, 1.0e-10, 1.0, 0.6),
        ),
        r("R492", "ClOO + Cl = Cl2 + O2", ConstantRate { k: 2.3e-10 }),
        // iodine
        r(
            "R493",
            "I + NO = INO",
            JplFalloff::abab(1.8e-32, 1.0, 1.7e-11, 0.0, 0.6),
        ),
        r(
            "R494",
            "I + NO2 = IONO",
            JplFalloff::abab(3.0e-31, 1.0, 6.6e-11, 0.0, 0.63),
        ),
        r(
            "R495",
            "IO + NO2 = IONO2",
            JplFalloff::abab(7.5e-31, 3.5, 7.6e-12, 1.5, 0.6),
        ),
        r("R496", "INO = I + NO", Arrhenius::ac(1.1e15, -21600.0)),
        r("R497", "IONO = I + NO2", Arrhenius::ac(2.5e15, -17400.0)),
        r("R498", "IONO2 = IO + NO2", Arrhenius::ac(2.1e15, -13670.0)),
        r("R499", "I2O3 + OH = OIO + HOI", ConstantRate { k: 1.0e-12 }),
        r("R500", "OIO + OH = HIO3", ConstantRate { k: 2.2e-10 }),
    ];
    reactions.extend(arrhenius_rows(&BROMINE));
    reactions.extend(arrhenius_rows(&CHLORINE));
    reactions.extend(arrhenius_rows(&CHLORINE_SOURCES));
    reactions.extend(arrhenius_rows(&IODINE));
    reactions
}
