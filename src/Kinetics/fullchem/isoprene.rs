//! Isoprene: OH and NO3 initiation, peroxy radical fates, H-shift isomerisation, epoxides,
//! hydroperoxy aldehydes and the MVK/MACR second generation.
use super::{ArrRow, arr, arrhenius_rows, isoprene_oh, nitrate, r};
use crate::Kinetics::gas_rate_laws::*;
use crate::Kinetics::reaction_table::ReactionSpec;

const SECOND_GENERATION: [ArrRow; 28] = [
    ("R300", "ISOP + O3 = 0.42 MACR + 0.17 MVK + 0.8 CH2O + 0.27 OH + 0.25 HO2 + 0.18 CO + 0.2 HCOOH", 1.03e-14, -1995.0),
    ("R301", "ISOP + NO3 = INO2B", 2.95e-12, -450.0),
    ("R302", "ISOP + NO3 = INO2D", 0.35e-12, -450.0),
    ("R303", "RIPD + OH = IEPOXD + OH", 4.75e-12, 200.0),
    ("R304", "RIPA + OH = 0.67 IHOO1 + 0.33 HPALD1 + 0.33 OH", 1.54e-12, 200.0),
    ("R305", "ICHE + OH = 0.5 MGLY + 0.5 GLYC + HO2 + CO", 9.85e-12, 410.0),
    ("R306", "HPALD1 + OH = IDC + OH", 1.17e-11, 450.0),
    ("R307", "HPALD2 + OH = IDC + OH", 1.17e-11, 450.0),
    ("R308", "IDC + OH = CO + HO2 + MVK", 3.0e-12, 650.0),
    ("R309", "INO2B + HO2 = INPB", 2.47e-13, 1300.0),
    ("R310", "INO2D + HO2 = INPD", 2.47e-13, 1300.0),
    ("R311", "INO2B + INO2B = 2 MVK + 2 CH2O + 2 NO2", 5.0e-12, 0.0),
    ("R312", "INO2B + MO2 = MVK + 2 CH2O + NO2 + HO2", 2.0e-13, 0.0),
    ("R313", "INPB + OH = INO2B", 2.5e-12, 0.0),
    ("R314", "INPB + OH = IDN + OH", 5.88e-12, 0.0),
    ("R315", "INPD + OH = ICN + OH", 1.5e-11, 0.0),
    ("R316", "ICN + OH = MVKN + CO + HO2", 9.35e-12, 0.0),
    ("R317", "IDN + OH = MVKN + CH2O + NO2", 1.0e-11, 0.0),
    ("R318", "IHN2 + OH = MVKN + HO2 + CH2O", 7.14e-12, 390.0),
    ("R319", "IHN4 + OH = MCRHN + HO2 + CH2O", 6.16e-12, 390.0),
    ("R320", "MVKN + OH = GLYC + MCO3 + NO2", 5.4e-12, 0.0),
    ("R321", "MCRHN + OH = HAC + CO + NO2 + OH", 1.39e-11, 380.0),
    ("R322", "MVK + O3 = 0.6 MGLY + 0.55 CH2O + 0.11 HO2 + 0.16 OH + 0.5 CO + 0.2 HCOOH", 8.5e-16, -1520.0),
    ("R323", "MACR + O3 = 0.88 MGLY + 0.12 CH2O + 0.2 HO2 + 0.2 OH + 0.12 CO + 0.5 HCOOH", 1.4e-15, -2100.0),
    ("R324", "MACR + NO3 = 0.5 MACR1OO + 0.5 HNO3 + 0.5 MCRHN", 1.8e-13, -1190.0),
    ("R325", "MACR1OO + NO = NO2 + MO2 + CH2O + CO2", 8.7e-12, 290.0),
    ("R326", "MACR1OO + HO2 = 0.5 MACR1OOH + 0.5 OH + 0.5 MO2 + 0.5 CH2O + 0.5 CO2", 4.3e-13, 1040.0),
    ("R327", "MPAN + OH = HMML + NO3", 2.9e-11, 0.0),
];

pub fn isoprene_reactions() -> Vec<ReactionSpec> {
    let mut reactions = vec![
        r("R71", "ISOP + OH = IHOO1", isoprene_oh(Branch::A)),
        r("R72", "ISOP + OH = IHOO4", isoprene_oh(Branch::B)),
        r(
            "R73",
            "IHOO1 = CH2O + OH + MVK",
            ArrPlus {
                a0: 1.04e11,
                b0: 9.746e3,
                d0: 1.1644,
                e0: -7.0485e-4,
            },
        ),
        r(
            "R74",
            "IHOO1 = HPALD1 + HO2",
            TunPlus {
                a0: 5.05e15,
                b0: -1.22e4,
                c0: 1.0e8,
                d0: -1.28e-2,
                e0: 5.8e-5,
            },
        ),
        r(
            "R75",
            "IHOO1 + NO = NO2 + HO2 + MVK + CH2O",
            nitrate(2.7e-12, 350.0, 5.0, Branch::B),
        ),
        r("R76", "IHOO1 + NO = IHN2", nitrate(2.7e-12, 350.0, 5.0, Branch::A)),
        r(
            "R77",
            "IHOO4 + NO = NO2 + HO2 + MACR + CH2O",
            nitrate(2.7e-12, 350.0, 5.0, Branch::B),
        ),
        r("R78", "IHOO4 + NO = IHN4", nitrate(2.7e-12, 350.0, 5.0, Branch::A)),
        r(
            "R79",
            "IHOO1 + HO2 = RIPA",
            Ro2Ho2 {
                a0: 2.91e-13,
                c0: 1300.0,
                n_carbon: 5.0,
                branch: Branch::A,
            },
        ),
        r(
            "R80",
            "IHOO1 + HO2 = MVK + CH2O + OH + HO2",
            Ro2Ho2 {
                a0: 2.91e-13,
                c0: 1300.0,
                n_carbon: 5.0,
                branch: Branch::B,
            },
        ),
        r("R81", "RIPA + OH = IEPOXA + OH", arr(4.75e-12, 200.0)),
        r(
            "R82",
            "IEPOXA + OH = ICHE + HO2",
            EpoxideOh {
                a1: 1.62e-11,
                e1: 390.0,
                m1: 4.77e-21,
            },
        ),
        r("R83", "MVK + OH = MCO3 + GLYC", arr(2.6e-12, 610.0)),
        r("R84", "MACR + OH = MCO3 + HAC", arr(8.0e-12, 380.0)),
        // IHOO4 fates mirror IHOO1
        r(
            "R328",
            "IHOO4 = CH2O + OH + MACR",
            ArrPlus {
                a0: 1.88e11,
                b0: 9.752e3,
                d0: 1.2038,
                e0: -9.0435e-4,
            },
        ),
        r(
            "R329",
            "IHOO4 = HPALD2 + HO2",
            TunPlus {
                a0: 2.22e9,
                b0: -7.16e3,
                c0: 1.0e8,
                d0: 1.0,
                e0: 0.0,
            },
        ),
        r(
            "R330",
            "IHOO4 + HO2 = RIPD",
            Ro2Ho2 {
                a0: 2.91e-13,
                c0: 1300.0,
                n_carbon: 5.0,
                branch: Branch::A,
            },
        ),
        r(
            "R331",
            "IHOO4 + HO2 = MACR + CH2O + OH + HO2",
            Ro2Ho2 {
                a0: 2.91e-13,
                c0: 1300.0,
                n_carbon: 5.0,
                branch: Branch::B,
            },
        ),
        r(
            "R332",
            "IEPOXD + OH = ICHE + HO2",
            EpoxideOh {
                a1: 3.22e-11,
                e1: -400.0,
                m1: 0.0,
            },
        ),
        r(
            "R333",
            "INO2B + NO = 2 NO2 + MVK + CH2O",
            nitrate(2.7e-12, 350.0, 5.0, Branch::B),
        ),
        r("R334", "INO2B + NO = IDN", nitrate(2.7e-12, 350.0, 5.0, Branch::A)),
        r(
            "R335",
            "INO2D + NO = 2 NO2 + MACR + CH2O",
            nitrate(2.7e-12, 350.0, 5.0, Branch::B),
        ),
        r("R336", "INO2D + NO = ICN", nitrate(2.7e-12, 350.0, 5.0, Branch::A)),
        // MPAN formation and decomposition
        r(
            "R337",
            "MACR1OO + NO2 = MPAN",
            JplFalloff::abab(9.7e-29, 5.6, 9.3e-12, 1.5, 0.6),
        ),
        r(
            "R338",
            "MPAN = MACR1OO + NO2",
            JplEquilibrium::acabab(9.0e-29, 14000.0, 9.7e-29, 5.6, 9.3e-12, 1.5, 0.6),
        ),
        r("R339", "MACR1OOH + OH = MACR1OO", arr(4.4e-12, 380.0)),
        r("R340", "HMML + OH = 0.6 HAC + 0.6 CO + 0.4 MCO3 + 0.6 OH", ConstantRate { k: 4.33e-12 }),
    ];
    reactions.extend(arrhenius_rows(&SECOND_GENERATION));
    reactions
}
