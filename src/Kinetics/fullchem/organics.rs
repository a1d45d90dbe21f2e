//! Non-isoprene organics: C2-C3 alkanes and alkenes, lumped C4+ alkanes, alcohols, acetone,
//! dicarbonyls and small oxygenates, aromatics and monoterpenes.
use super::{ArrRow, arr, arrhenius_rows, nitrate, r};
use crate::Kinetics::gas_rate_laws::*;
use crate::Kinetics::reaction_table::ReactionSpec;

const C2_C3: [ArrRow; 33] = [
    ("R140", "EOH + OH = ALD2 + HO2", 3.35e-12, 0.0),
    ("R141", "ETP + OH = ETO2 + H2O", 3.32e-12, 200.0),
    ("R142", "ETP + OH = ALD2 + OH", 1.86e-12, 200.0),
    ("R143", "ETO2 + ETO2 = 2 ALD2 + 2 HO2", 4.1e-14, 0.0),
    ("R144", "ETO2 + ETO2 = EOH + ALD2", 2.7e-14, 0.0),
    ("R145", "ETO2 + MO2 = ALD2 + CH2O + 2 HO2", 3.0e-13, 0.0),
    ("R146", "ETNO3 + OH = ALD2 + NO2 + H2O", 4.4e-14, 720.0),
    ("R147", "PAN + OH = CH2O + NO3 + CO2 + CO", 3.0e-14, 0.0),
    ("R148", "ACTA + OH = MO2 + CO2 + H2O", 3.15e-14, 920.0),
    ("R149", "MAP + OH = MCO3 + H2O", 6.13e-13, 200.0),
    ("R150", "ALD2 + NO3 = HNO3 + MCO3", 1.4e-12, -1860.0),
    ("R151", "MCO3 + MCO3 = 2 MO2 + 2 CO2", 2.5e-12, 500.0),
    ("R152", "MCO3 + NO3 = MO2 + NO2 + CO2", 4.0e-12, 0.0),
    ("R153", "C2H4 + O3 = CH2O + 0.12 HO2 + 0.5 CO + 0.12 OH + 0.5 HCOOH", 9.1e-15, -2580.0),
    ("R154", "ETOO + HO2 = ETHP", 7.5e-13, 700.0),
    ("R155", "ETHP + OH = GLYC + OH", 1.38e-11, 0.0),
    ("R156", "ETHN + OH = GLYC + NO2", 8.4e-13, 0.0),
    ("R157", "PRPE + O3 = 0.5 ALD2 + 0.5 CH2O + 0.36 OH + 0.3 CO + 0.28 HO2 + 0.12 MO2", 5.5e-15, -1880.0),
    ("R158", "PRPE + NO3 = PRN1", 4.59e-13, -1156.0),
    ("R159", "PO2 + HO2 = PP", 7.5e-13, 700.0),
    ("R160", "PP + OH = 0.79 PO2 + 0.21 HAC + 0.21 OH", 2.7e-12, 200.0),
    ("R161", "PRPN + OH = HAC + NO2", 8.78e-12, 0.0),
    ("R162", "PRN1 + NO = 2 NO2 + CH2O + ALD2", 2.7e-12, 350.0),
    ("R163", "A3O2 + HO2 = RP", 2.91e-13, 1300.0),
    ("R164", "B3O2 + HO2 = RB3P", 2.91e-13, 1300.0),
    ("R165", "RP + OH = RCO3 + H2O", 2.7e-12, 200.0),
    ("R166", "RB3P + OH = 0.79 B3O2 + 0.21 ACET + 0.21 OH", 2.7e-12, 200.0),
    ("R167", "NPRNO3 + OH = RCHO + NO2", 7.07e-13, 0.0),
    ("R168", "IPRNO3 + OH = ACET + NO2", 4.5e-13, 0.0),
    ("R169", "RCHO + NO3 = HNO3 + RCO3", 6.5e-15, 0.0),
    ("R170", "RCO3 + NO = NO2 + ETO2 + CO2", 6.7e-12, 340.0),
    ("R171", "RCO3 + HO2 = 0.44 OH + 0.44 ETO2 + 0.44 CO2 + 0.56 RP", 4.3e-13, 1040.0),
    ("R172", "RCO3 + MO2 = ETO2 + CH2O + HO2 + CO2", 1.68e-12, 500.0),
];

const KETONES_C4: [ArrRow; 14] = [
    ("R173", "ATO2 + NO = NO2 + MCO3 + CH2O", 2.8e-12, 300.0),
    ("R174", "ATO2 + HO2 = ATOOH", 8.6e-13, 700.0),
    ("R175", "ATOOH + OH = 0.5 ATO2 + 0.5 MGLY + 0.5 OH", 2.66e-12, 200.0),
    ("R176", "MGLY + NO3 = HNO3 + CO + MCO3", 1.4e-12, -1860.0),
    ("R177", "ALK4 + OH = R4O2", 9.1e-12, -405.0),
    ("R178", "ALK4 + NO3 = HNO3 + R4O2", 2.8e-12, -3280.0),
    ("R179", "R4O2 + HO2 = R4P", 7.4e-13, 700.0),
    ("R180", "R4P + OH = 0.79 R4O2 + 0.21 OH + 0.21 MEK", 3.6e-12, 200.0),
    ("R181", "R4N2 + OH = R4N1 + H2O", 1.6e-12, 0.0),
    ("R182", "R4N1 + NO = 2 NO2 + 0.57 RCHO + 0.86 ALD2 + 0.57 CH2O", 2.7e-12, 350.0),
    ("R183", "MEK + OH = KO2 + H2O", 1.3e-12, -25.0),
    ("R184", "KO2 + HO2 = 0.15 OH + 0.15 ALD2 + 0.15 MCO3 + 0.85 ATOOH", 7.4e-13, 700.0),
    ("R185", "R4N1 + HO2 = R4N2", 7.4e-13, 700.0),
    ("R186", "MEK + NO3 = HNO3 + KO2", 8.0e-16, 0.0),
];

const AROMATICS: [ArrRow; 22] = [
    ("R187", "BENZ + OH = 0.47 BRO2 + 0.53 PHEN + 0.53 HO2", 2.33e-12, -193.0),
    ("R188", "TOLU + OH = 0.82 TRO2 + 0.18 CSL + 0.18 HO2", 1.8e-12, 340.0),
    ("R189", "XYLE + OH = 0.8 XRO2 + 0.2 CSL + 0.2 HO2", 2.3e-11, 0.0),
    ("R190", "BRO2 + NO = NO2 + HO2 + GLYX + AROMP4", 2.6e-12, 350.0),
    ("R191", "TRO2 + NO = NO2 + HO2 + 0.5 GLYX + 0.5 MGLY + AROMP5", 2.6e-12, 350.0),
    ("R192", "XRO2 + NO = NO2 + HO2 + 0.3 GLYX + 0.7 MGLY + AROMP5", 2.6e-12, 350.0),
    ("R193", "BRO2 + HO2 = LBRO2H + HO2", 1.4e-12, 700.0),
    ("R194", "TRO2 + HO2 = LTRO2H + HO2", 1.4e-12, 700.0),
    ("R195", "XRO2 + HO2 = LXRO2H + HO2", 1.4e-12, 700.0),
    ("R196", "BRO2 + NO = LBRO2N + NO", 2.6e-12, 350.0),
    ("R197", "PHEN + OH = 0.06 GLYX + 0.94 HO2 + 0.94 MCT", 4.7e-13, 1220.0),
    ("R198", "PHEN + NO3 = HNO3 + NPHEN", 3.8e-12, 0.0),
    ("R199", "CSL + OH = 0.2 GLYX + 0.8 HO2 + 0.8 MCT", 4.65e-11, 0.0),
    ("R200", "CSL + NO3 = HNO3 + NPHEN", 1.4e-11, 0.0),
    ("R201", "MCT + OH = 0.3 GLYX + 0.3 MGLY + 0.7 HO2 + 0.3 OH", 2.05e-10, 0.0),
    ("R202", "MCT + O3 = GLYC + HO2 + OH + 0.5 GLYX", 9.2e-18, 0.0),
    ("R203", "MCT + NO3 = NPHEN + HNO3", 9.9e-11, 0.0),
    ("R204", "NPHEN + OH = AROMP4 + NO2", 3.47e-12, 0.0),
    ("R205", "AROMP4 + OH = 0.6 GLYX + 0.25 CO + 0.33 HO2 + 0.33 RCO3", 6.0e-11, 0.0),
    ("R206", "AROMP4 + O3 = 0.5 GLYX + 0.5 HCOOH + 0.2 OH + 0.4 CO", 2.4e-18, 0.0),
    ("R207", "AROMP5 + OH = 0.6 MGLY + 0.3 GLYX + 0.5 HO2 + 0.4 RCO3", 5.2e-11, 0.0),
    ("R208", "AROMP5 + O3 = 0.6 MGLY + 0.3 HCOOH + 0.2 OH + 0.4 CO", 1.6e-17, 0.0),
];

const MONOTERPENES: [ArrRow; 16] = [
    ("R210", "MTPA + OH = PIO2", 1.21e-11, 440.0),
    ("R211", "MTPO + OH = PIO2", 1.21e-11, 440.0),
    ("R212", "LIMO + OH = LIMO2", 4.2e-11, 401.0),
    ("R213", "MTPA + O3 = 0.85 OH + 0.1 HO2 + 0.62 KO2 + 0.14 CO + 0.02 H2O2 + 0.65 RCHO + 0.53 MEK", 5.0e-16, -530.0),
    ("R214", "MTPO + O3 = 0.85 OH + 0.1 HO2 + 0.62 KO2 + 0.14 CO + 0.02 H2O2 + 0.65 RCHO + 0.53 MEK", 5.0e-16, -530.0),
    ("R215", "LIMO + O3 = 0.85 OH + 0.1 HO2 + 0.16 ETO2 + 0.42 KO2 + 0.02 H2O2 + 0.14 CO + 0.46 PRPE + 0.04 CH2O + 0.79 MACR", 2.95e-15, -783.0),
    ("R216", "MTPA + NO3 = 0.5 MONITS + 0.5 MONITU", 8.33e-13, 490.0),
    ("R217", "MTPO + NO3 = 0.5 MONITS + 0.5 MONITU", 8.33e-13, 490.0),
    ("R218", "LIMO + NO3 = MONITU", 1.22e-11, 0.0),
    ("R219", "PIO2 + HO2 = PIP", 2.91e-13, 1300.0),
    ("R220", "LIMO2 + HO2 = PIP", 2.91e-13, 1300.0),
    ("R221", "PIP + OH = 0.49 OH + 0.44 R4O2 + 0.08 RCHO + 0.41 MEK", 3.4e-12, 190.0),
    ("R222", "PIO2 + MO2 = HO2 + 0.75 CH2O + 0.25 MOH + 0.5 RCHO + 0.5 MEK", 3.56e-14, 708.0),
    ("R223", "MONITS + OH = HONIT", 4.8e-12, 0.0),
    ("R224", "MONITU + OH = HONIT", 7.29e-11, 0.0),
    ("R225", "HONIT + OH = NO3 + HAC", 1.0e-12, 0.0),
];

pub fn organic_reactions() -> Vec<ReactionSpec> {
    let mut reactions = vec![
        // C2
        r("R41", "C2H6 + OH = ETO2 + H2O", arr(7.66e-12, -1020.0)),
        r(
            "R42",
            "ETO2 + NO = ALD2 + NO2 + HO2",
            nitrate(2.6e-12, 365.0, 2.0, Branch::B),
        ),
        r("R43", "ETO2 + NO = ETNO3", nitrate(2.6e-12, 365.0, 2.0, Branch::A)),
        r(
            "R44",
            "ETO2 + HO2 = ETP",
            Ro2Ho2 {
                a0: 7.4e-13,
                c0: 700.0,
                n_carbon: 2.0,
                branch: Branch::A,
            },
        ),
        r(
            "R45",
            "ETO2 + HO2 = ALD2 + OH + HO2",
            Ro2Ho2 {
                a0: 7.4e-13,
                c0: 700.0,
                n_carbon: 2.0,
                branch: Branch::B,
            },
        ),
        r("R46", "ALD2 + OH = MCO3 + H2O", arr(4.63e-12, 350.0)),
        r(
            "R47",
            "MCO3 + NO2 = PAN",
            JplFalloff::abab(9.7e-29, 5.6, 9.3e-12, 1.5, 0.6),
        ),
        r(
            "R48",
            "PAN = MCO3 + NO2",
            TroeFalloff::acac(4.9e-3, -12100.0, 5.4e16, -13830.0, 0.3),
        ),
        r("R49", "MCO3 + NO = MO2 + NO2 + CO2", arr(8.1e-12, 270.0)),
        r(
            "R50",
            "MCO3 + HO2 = 0.44 OH + 0.44 MO2 + 0.44 CO2 + 0.15 ACTA + 0.41 MAP",
            arr(4.3e-13, 1040.0),
        ),
        r("R51", "MCO3 + MO2 = 2 CH2O + 2 HO2 + CO2", arr(2.0e-12, 500.0)),
        r(
            "R226",
            "C2H4 + OH = ETOO",
            JplFalloff::abab(1.1e-28, 3.5, 8.4e-12, 1.75, 0.5),
        ),
        r(
            "R227",
            "ETOO + NO = NO2 + 1.5 CH2O + 0.25 GLYC + HO2",
            nitrate(2.6e-12, 365.0, 2.0, Branch::B),
        ),
        r("R228", "ETOO + NO = ETHN", nitrate(2.6e-12, 365.0, 2.0, Branch::A)),
        // C3
        r(
            "R52",
            "C3H8 + OH = A3O2",
            TemperatureBranch::acabc(7.6e-12, -585.0, 5.87, 0.64, -816.0),
        ),
        r(
            "R53",
            "C3H8 + OH = B3O2",
            TemperatureBranch::acabc(7.6e-12, -585.0, 1.7e-1, -0.64, 816.0),
        ),
        r(
            "R54",
            "A3O2 + NO = NO2 + HO2 + RCHO",
            nitrate(2.9e-12, 350.0, 3.0, Branch::B),
        ),
        r("R55", "A3O2 + NO = NPRNO3", nitrate(2.9e-12, 350.0, 3.0, Branch::A)),
        r(
            "R56",
            "B3O2 + NO = NO2 + HO2 + ACET",
            nitrate(2.7e-12, 360.0, 3.0, Branch::B),
        ),
        r("R57", "B3O2 + NO = IPRNO3", nitrate(2.7e-12, 360.0, 3.0, Branch::A)),
        r("R58", "RCHO + OH = RCO3 + H2O", arr(5.1e-12, 405.0)),
        r(
            "R59",
            "RCO3 + NO2 = PPN",
            JplFalloff::abab(9.0e-28, 8.9, 7.7e-12, 0.2, 0.6),
        ),
        r(
            "R60",
            "PPN = RCO3 + NO2",
            JplEquilibrium::acabab(9.0e-29, 14000.0, 9.0e-28, 8.9, 7.7e-12, 0.2, 0.6),
        ),
        r("R61", "ACET + OH = ATO2 + H2O", arr(3.82e-11, -2000.0)),
        r("R62", "ACET + OH = ATO2 + H2O", ConstantRate { k: 1.33e-13 }),
        r(
            "R229",
            "PRPE + OH = PO2",
            JplFalloff::abab(8.0e-27, 3.5, 3.0e-11, 0.0, 0.5),
        ),
        r(
            "R230",
            "PO2 + NO = NO2 + HO2 + ALD2 + CH2O",
            nitrate(2.7e-12, 350.0, 3.0, Branch::B),
        ),
        r("R231", "PO2 + NO = PRPN", nitrate(2.7e-12, 350.0, 3.0, Branch::A)),
        // dicarbonyls and small oxygenates
        r("R63", "GLYX + OH = HO2 + 2 CO", arr(3.1e-12, 340.0)),
        r(
            "R64",
            "GLYX + NO3 = HNO3 + HO2 + 2 CO",
            GlyxNo3 {
                a0: 1.4e-12,
                c0: -1860.0,
            },
        ),
        r(
            "R65",
            "GLYC + OH = 0.732 CH2O + 0.361 CO2 + 0.505 CO + 0.227 OH + 0.773 HO2 + 0.134 GLYX + 0.134 HCOOH",
            GlycOh {
                a0: 8.0e-12,
                branch: Branch::A,
            },
        ),
        r(
            "R66",
            "GLYC + OH = HCOOH + OH + CO",
            GlycOh {
                a0: 8.0e-12,
                branch: Branch::B,
            },
        ),
        r(
            "R67",
            "HAC + OH = MGLY + HO2",
            HacOh {
                a0: 2.15e-12,
                c0: 305.0,
                branch: Branch::A,
            },
        ),
        r(
            "R68",
            "HAC + OH = 0.5 HCOOH + OH + 0.5 ACTA + 0.5 CO2 + 0.5 CO + 0.5 MO2",
            HacOh {
                a0: 2.15e-12,
                c0: 305.0,
                branch: Branch::B,
            },
        ),
        r("R69", "MGLY + OH = MCO3 + CO", arr(1.9e-12, 575.0)),
        r("R70", "HCOOH + OH = H2O + CO2 + HO2", Arrhenius::new(4.0e-13, 0.0, 0.0)),
        // lumped C4+ alkanes and ketones
        r(
            "R232",
            "R4O2 + NO = NO2 + 0.32 ACET + 0.19 MEK + 0.18 MO2 + 0.27 HO2 + 0.32 ALD2 + 0.13 RCHO + 0.05 A3O2 + 0.18 B3O2 + 0.32 ETO2",
            nitrate(2.7e-12, 360.0, 4.5, Branch::B),
        ),
        r("R233", "R4O2 + NO = R4N2", nitrate(2.7e-12, 360.0, 4.5, Branch::A)),
        r(
            "R234",
            "KO2 + NO = NO2 + 0.93 ALD2 + 0.93 MCO3 + 0.07 RCHO + 0.07 ETO2",
            nitrate(2.7e-12, 350.0, 4.0, Branch::B),
        ),
        r("R235", "KO2 + NO = R4N2", nitrate(2.7e-12, 350.0, 4.0, Branch::A)),
        // monoterpene peroxy radicals
        r(
            "R236",
            "PIO2 + NO = NO2 + HO2 + 0.23 CH2O + 0.43 RCHO + 0.11 ACET + 0.44 MEK + 0.07 HCOOH",
            nitrate(2.7e-12, 360.0, 10.0, Branch::B),
        ),
        r("R237", "PIO2 + NO = MONITS", nitrate(2.7e-12, 360.0, 10.0, Branch::A)),
        r(
            "R238",
            "LIMO2 + NO = NO2 + HO2 + 0.69 CH2O + 0.31 MACR + 0.69 MVK",
            nitrate(2.7e-12, 360.0, 10.0, Branch::B),
        ),
        r("R239", "LIMO2 + NO = MONITU", nitrate(2.7e-12, 360.0, 10.0, Branch::A)),
        r("R240", "MONITU + O3 = HONIT", ConstantRate { k: 1.67e-16 }),
        // acetylene, HCN and nitrooxy carbonyls
        r(
            "R241",
            "C2H2 + OH = 0.636 GLYX + 0.636 OH + 0.364 CO + 0.364 HO2 + 0.364 HCOOH",
            JplFalloff::abab(5.5e-30, 0.0, 8.3e-13, -2.0, 0.6),
        ),
        r("R242", "HCN + OH = CO + HO2 + NO", arr(1.2e-13, -400.0)),
        r("R243", "ETHN + OH = ETHLN + HO2", ConstantRate { k: 1.2e-12 }),
        r("R244", "ETHLN + OH = CH2O + CO2 + NO2", ConstantRate { k: 2.4e-12 }),
    ];
    reactions.extend(arrhenius_rows(&C2_C3));
    reactions.extend(arrhenius_rows(&KETONES_C4));
    reactions.extend(arrhenius_rows(&AROMATICS));
    reactions.extend(arrhenius_rows(&MONOTERPENES));
    reactions
}
