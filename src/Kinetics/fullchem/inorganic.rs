//! Ox, HOx, NOx, CO and CH4 chemistry and sulfur.
use super::{ArrRow, arr, arrhenius_rows, r};
use crate::Kinetics::gas_rate_laws::*;
use crate::Kinetics::reaction_table::ReactionSpec;

const OX_HOX: [ArrRow; 14] = [
    ("R100", "O1D + N2O = 2 NO", 7.25e-11, 20.0),
    ("R101", "O1D + N2O = N2 + O2", 4.63e-11, 20.0),
    ("R102", "O1D + CH4 = MO2 + OH", 1.31e-10, 0.0),
    ("R103", "O1D + CH4 = CH2O + H2", 0.09e-10, 0.0),
    ("R104", "O1D + H2 = OH + HO2", 1.2e-10, 0.0),
    ("R105", "O + O3 = 2 O2", 8.0e-12, -2060.0),
    ("R106", "O + NO2 = NO + O2", 5.1e-12, 210.0),
    ("R107", "O + HO2 = OH + O2", 3.0e-11, 200.0),
    ("R108", "O + OH = HO2", 1.8e-11, 180.0),
    ("R109", "O + H2O2 = OH + HO2", 1.4e-12, -2000.0),
    ("R110", "OH + NO3 = HO2 + NO2", 2.2e-11, 0.0),
    ("R111", "NO3 + NO3 = 2 NO2 + O2", 8.5e-13, -2450.0),
    ("R112", "NO2 + NO3 = NO + NO2 + O2", 4.5e-14, -1260.0),
    ("R113", "N2O5 + H2O = 2 HNO3", 2.5e-22, 0.0),
];

const C1_SULFUR: [ArrRow; 9] = [
    ("R114", "MOH + OH = CH2O + HO2 + H2O", 2.9e-12, -345.0),
    ("R115", "MENO3 + OH = CH2O + NO2 + H2O", 8.0e-13, -1000.0),
    ("R116", "MO2 + NO3 = CH2O + HO2 + NO2", 1.2e-12, 0.0),
    ("R117", "MO2 + OH = MOH + O2", 1.4e-10, 0.0),
    ("R118", "OCS + OH = SO2 + CO2 + HO2", 1.1e-13, -1200.0),
    ("R119", "DMS + Cl = SO2 + MO2 + CH2O + HCl", 3.6e-10, 0.0),
    ("R120", "DMS + BrO = SO2 + Br + MO2 + CH2O", 1.5e-14, 1000.0),
    ("R121", "CH2O + HO2 = HCOOH + HO2", 9.7e-15, 625.0),
    ("R122", "H2O2 + O1D = OH + HO2", 5.2e-10, 0.0),
];

pub fn inorganic_reactions() -> Vec<ReactionSpec> {
    let mut reactions = vec![
        // Ox, HOx
        r("R1", "O3 + NO = NO2 + O2", arr(3.0e-12, -1500.0)),
        r("R2", "O3 + OH = HO2 + O2", arr(1.7e-12, -940.0)),
        r("R3", "O3 + HO2 = OH + 2 O2", arr(1.0e-14, -490.0)),
        r("R4", "O3 + NO2 = NO3 + O2", arr(1.2e-13, -2450.0)),
        r("R5", "O1D + O2 = O + O2", arr(3.3e-11, 55.0)),
        r("R6", "O1D + N2 = O + N2", arr(2.15e-11, 110.0)),
        r("R7", "O1D + H2O = 2 OH", arr(1.63e-10, 60.0)),
        r(
            "R8",
            "O + O2 = O3",
            ThirdBody {
                arrhenius: Arrhenius::ab(6.0e-34, 2.4),
            },
        ),
        r("R9", "OH + H2 = H2O + HO2", arr(2.8e-12, -1800.0)),
        r("R10", "OH + HO2 = H2O + O2", arr(4.8e-11, 250.0)),
        r("R11", "OH + OH = H2O + O", Arrhenius::new(1.8e-12, 0.0, 0.0)),
        r("R12", "OH + H2O2 = H2O + HO2", Arrhenius::new(1.8e-12, 0.0, 0.0)),
        r("R13", "HO2 + NO = OH + NO2", arr(3.3e-12, 270.0)),
        r(
            "R14",
            "HO2 + HO2 = H2O2 + O2",
            Ho2Ho2 {
                a0: 3.0e-13,
                c0: 460.0,
                a1: 2.1e-33,
                c1: 920.0,
            },
        ),
        r("R15", "OH + CO = HO2 + CO2", OhCo { a0: 1.5e-13 }),
        // CH4 oxidation
        r("R16", "OH + CH4 = MO2 + H2O", arr(2.45e-12, -1775.0)),
        r(
            "R17",
            "MO2 + NO = CH2O + HO2 + NO2",
            Ro2NoFixedYield {
                a0: 2.8e-12,
                c0: 300.0,
                branch: Branch::B,
            },
        ),
        r(
            "R18",
            "MO2 + NO = MENO3",
            Ro2NoFixedYield {
                a0: 2.8e-12,
                c0: 300.0,
                branch: Branch::A,
            },
        ),
        r("R19", "MO2 + HO2 = MP + O2", arr(4.1e-13, 750.0)),
        r(
            "R20",
            "MO2 + MO2 = MOH + CH2O + O2",
            TemperatureBranch::acac(9.5e-14, 390.0, 26.2, -1130.0),
        ),
        r(
            "R21",
            "MO2 + MO2 = 2 CH2O + 2 HO2",
            TemperatureBranch::acac(9.5e-14, 390.0, 4.0e-2, 1130.0),
        ),
        r("R22", "MP + OH = MO2 + H2O", arr(2.66e-12, 200.0)),
        r("R23", "MP + OH = CH2O + OH + H2O", arr(1.14e-12, 200.0)),
        r("R24", "CH2O + OH = CO + HO2 + H2O", arr(5.5e-12, 125.0)),
        // NOy
        r(
            "R25",
            "NO2 + OH = HNO3",
            JplFalloff::abab(1.8e-30, 3.0, 2.8e-11, 0.0, 0.6),
        ),
        r(
            "R26",
            "HNO3 + OH = H2O + NO3",
            OhHno3 {
                a0: 2.41e-14,
                c0: 460.0,
                a1: 2.69e-17,
                c1: 2199.0,
                a2: 6.51e-34,
                c2: 1335.0,
            },
        ),
        r(
            "R27",
            "NO + OH = HNO2",
            JplFalloff::abab(7.0e-31, 2.6, 3.6e-11, 0.1, 0.6),
        ),
        r("R28", "HNO2 + OH = H2O + NO2", arr(1.8e-11, -390.0)),
        r(
            "R29",
            "HO2 + NO2 = HNO4",
            JplFalloff::abab(1.9e-31, 3.4, 4.0e-12, 0.3, 0.6),
        ),
        r(
            "R30",
            "HNO4 = HO2 + NO2",
            JplEquilibrium::acabab(2.1e-27, 10900.0, 1.9e-31, 3.4, 4.0e-12, 0.3, 0.6),
        ),
        r("R31", "HNO4 + OH = H2O + NO2 + O2", arr(1.3e-12, 380.0)),
        r("R32", "NO3 + NO = 2 NO2", arr(1.5e-11, 170.0)),
        r(
            "R33",
            "NO3 + NO2 = N2O5",
            JplFalloff::abab(2.4e-30, 3.0, 1.6e-12, -0.1, 0.6),
        ),
        r(
            "R34",
            "N2O5 = NO3 + NO2",
            JplEquilibrium::acabab(2.7e-27, 11000.0, 2.4e-30, 3.0, 1.6e-12, -0.1, 0.6),
        ),
        r("R35", "NO3 + HO2 = OH + NO2 + O2", Arrhenius::new(3.5e-12, 0.0, 0.0)),
        r("R36", "NO3 + CH2O = HNO3 + HO2 + CO", Arrhenius::new(5.8e-16, 0.0, 0.0)),
        // sulfur
        r(
            "R37",
            "OH + SO2 = SO4 + HO2",
            JplFalloff::abab(3.3e-31, 4.3, 1.6e-12, 0.0, 0.6),
        ),
        r("R38", "DMS + OH = SO2 + MO2 + CH2O", arr(1.2e-11, -280.0)),
        r(
            "R39",
            "DMS + OH = 0.75 SO2 + 0.25 MSA + MO2",
            DmsOh {
                a0: 8.2e-39,
                c0: 5376.0,
                a1: 1.05e-5,
                c1: 3644.0,
            },
        ),
        r("R40", "DMS + NO3 = SO2 + HNO3 + MO2 + CH2O", arr(1.9e-13, 530.0)),
        // three-body and falloff additions
        r(
            "R123",
            "O + NO = NO2",
            JplFalloff::abab(9.0e-32, 1.5, 3.0e-11, 0.0, 0.6),
        ),
        r(
            "R124",
            "O + NO2 = NO3",
            JplFalloff::abab(2.5e-31, 1.8, 2.2e-11, 0.7, 0.6),
        ),
        r(
            "R125",
            "OH + OH = H2O2",
            JplFalloff::abab(6.9e-31, 1.0, 2.6e-11, 0.0, 0.6),
        ),
        // termolecular in the gas phase, O2 is a participant
        r("R126", "2 NO + O2 = 2 NO2", arr(3.3e-39, 530.0)),
        // methyl peroxynitrate
        r(
            "R127",
            "MO2 + NO2 = MPN",
            JplFalloff::abab(1.0e-30, 4.8, 7.2e-12, 2.1, 0.6),
        ),
        r(
            "R128",
            "MPN = MO2 + NO2",
            JplEquilibrium::acabab(9.5e-29, 11234.0, 1.0e-30, 4.8, 7.2e-12, 2.1, 0.6),
        ),
    ];
    reactions.extend(arrhenius_rows(&OX_HOX));
    reactions.extend(arrhenius_rows(&C1_SULFUR));
    reactions
}
