//! Heterogeneous uptake on aerosol, cloud and stratospheric surfaces.
//!
//! Gas-phase halide partners (HBr, HCl) react on sulfate, cloud and stratospheric particles.
//! On sea salt the partner is the aerosol halide itself, so those reactions are generated per
//! sea-salt mode against the mode's own chloride, bromide and alkalinity tracers.
use super::r;
use crate::Kinetics::het_chem_state::{AerosolType, HetReaction};
use crate::Kinetics::het_rate_laws::{
    HalideUptake, HetUptake, IonPartner, StratUptake, UptakeGamma, UptakeShare,
};
use crate::Kinetics::reaction_table::{ReactionSet, ReactionSpec};
use strum::IntoEnumIterator;

fn sr(mw: f64) -> f64 {
    mw.sqrt()
}

fn fixed(gamma: f64) -> UptakeGamma {
    UptakeGamma::Fixed { gamma }
}

fn strat(reaction: HetReaction, nat_gamma: f64, ice_gamma: f64) -> StratUptake {
    StratUptake {
        reaction,
        nat_gamma,
        ice_gamma,
    }
}

fn halide(id: &str, equation: &str, uptake: HetUptake) -> ReactionSpec {
    r(id, equation, uptake.acid_gated().limited())
}

fn sulfate() -> Vec<AerosolType> {
    vec![AerosolType::Sulfate]
}

/// tracer names carried by one sea-salt mode
struct SeaSaltMode {
    tag: &'static str,
    surface: AerosolType,
    chloride: &'static str,
    bromide: &'static str,
    iodide: &'static str,
    nitrate: &'static str,
    alkalinity: &'static str,
}

const FINE_SALT: SeaSaltMode = SeaSaltMode {
    tag: "A",
    surface: AerosolType::SeaSaltFine,
    chloride: "SALACL",
    bromide: "BrSALA",
    iodide: "ISALA",
    nitrate: "NIT",
    alkalinity: "SALAAL",
};

const COARSE_SALT: SeaSaltMode = SeaSaltMode {
    tag: "C",
    surface: AerosolType::SeaSaltCoarse,
    chloride: "SALCCL",
    bromide: "BrSALC",
    iodide: "ISALC",
    nitrate: "NITS",
    alkalinity: "SALCAL",
};

/// uptake on one sea-salt mode; halide partners are the mode's own tracers
fn sea_salt_reactions(mode: &SeaSaltMode) -> Vec<ReactionSpec> {
    let on_salt =
        |sr_mw: f64, gamma: UptakeGamma| HetUptake::new(sr_mw, gamma).on_surfaces(vec![mode.surface]);
    let (cl, br, iod) = (mode.chloride, mode.bromide, mode.iodide);
    let (nit, alk) = (mode.nitrate, mode.alkalinity);
    let hobr = |p| UptakeGamma::Halide(HalideUptake::hobr(p));
    let hocl = |p| UptakeGamma::Halide(HalideUptake::hocl(p));

    let acid_halide = [
        (format!("HOBr + {cl} = BrCl"), on_salt(sr(97.0), hobr(IonPartner::Chloride))),
        (format!("HOBr + {br} = Br2"), on_salt(sr(97.0), hobr(IonPartner::Bromide))),
        (format!("HOCl + {cl} = Cl2"), on_salt(sr(52.5), hocl(IonPartner::Chloride))),
        (format!("HOCl + {br} = BrCl"), on_salt(sr(52.5), hocl(IonPartner::Bromide))),
        (format!("O3 + {br} = HOBr"), on_salt(sr(48.0), fixed(1.0e-6))),
        (format!("HOI + {cl} = ICl"), on_salt(sr(144.0), fixed(0.01))),
        (format!("HOI + {br} = IBr"), on_salt(sr(144.0), fixed(0.01))),
    ];
    let nitrates = [
        (format!("ClNO3 + {cl} = Cl2 + HNO3"), on_salt(sr(97.5), fixed(0.02))),
        (format!("ClNO3 + {br} = BrCl + HNO3"), on_salt(sr(97.5), fixed(0.3))),
        (format!("BrNO3 + {cl} = BrCl + HNO3"), on_salt(sr(142.0), fixed(0.1))),
        (format!("BrNO3 + {br} = Br2 + HNO3"), on_salt(sr(142.0), fixed(0.1))),
        (format!("IONO + {cl} = ICl + HNO2"), on_salt(sr(173.0), fixed(0.02))),
        (format!("IONO + {br} = IBr + HNO2"), on_salt(sr(173.0), fixed(0.02))),
        (format!("IONO2 + {cl} = ICl + HNO3"), on_salt(sr(189.0), fixed(0.01))),
        (format!("IONO2 + {br} = IBr + HNO3"), on_salt(sr(189.0), fixed(0.01))),
        // acid displacement against the alkalinity reservoir
        (format!("HNO3 + {alk} = {nit}"), on_salt(sr(63.0), fixed(0.5))),
        (format!("HCl + {alk} = {cl}"), on_salt(sr(36.5), fixed(0.07))),
        (format!("SO2 + {alk} = SO4S"), on_salt(sr(64.0), fixed(0.05))),
    ];
    let iodine_oxides = [
        (format!("I2O2 = 2 {iod}"), on_salt(sr(286.0), fixed(0.02))),
        (format!("I2O3 = 2 {iod}"), on_salt(sr(302.0), fixed(0.02))),
        (format!("I2O4 = 2 {iod}"), on_salt(sr(318.0), fixed(0.02))),
    ];

    let acid_halide = acid_halide
        .into_iter()
        .map(|(eq, uptake)| (eq, uptake.acid_gated().limited()));
    let nitrates = nitrates
        .into_iter()
        .map(|(eq, uptake)| (eq, uptake.limited()));
    acid_halide
        .chain(nitrates)
        .chain(iodine_oxides)
        .enumerate()
        .map(|(i, (eq, uptake))| r(&format!("HS{}{}", mode.tag, i + 1), &eq, uptake))
        .collect()
}

pub fn het_reactions() -> Vec<ReactionSpec> {
    let trop = AerosolType::tropospheric;
    let aqueous = AerosolType::aqueous;
    let dust: Vec<AerosolType> = AerosolType::iter().filter(|t| t.is_dust()).collect();
    let n2o5 = HetUptake::new(sr(108.0), UptakeGamma::N2O5)
        .on_surfaces(trop())
        .in_cloud(Some(0.02));
    let mut specs = vec![
        r(
            "H1",
            "HO2 = 0.5 H2O2",
            HetUptake::new(sr(33.0), UptakeGamma::Ho2)
                .on_surfaces(trop())
                .in_cloud(None),
        ),
        r(
            "H2",
            "NO2 = 0.5 HNO3 + 0.5 HNO2",
            HetUptake::new(sr(46.0), fixed(1.0e-4)).on_surfaces(trop()),
        ),
        r(
            "H3",
            "NO3 = HNO3",
            HetUptake::new(sr(62.0), fixed(0.1))
                .on_surfaces(trop())
                .in_cloud(None),
        ),
        r(
            "H4",
            "N2O5 = 2 HNO3",
            n2o5.clone()
                .with_share(UptakeShare::Hydrolysis)
                .in_stratosphere(strat(HetReaction::N2O5PlusH2O, 4.0e-4, 0.02)),
        ),
        r(
            "H5",
            "N2O5 + SALACL = ClNO2 + HNO3 + SALACL",
            n2o5.with_share(UptakeShare::ClNO2),
        )
        .divided_by("SALACL"),
        r(
            "H6",
            "N2O5 + HCl = ClNO2 + HNO3",
            HetUptake::new(sr(108.0), fixed(0.0))
                .in_stratosphere(strat(HetReaction::N2O5PlusHCl, 3.0e-3, 0.03))
                .limited(),
        ),
        halide(
            "H7",
            "HOBr + HBr = Br2 + H2O",
            HetUptake::new(
                sr(97.0),
                UptakeGamma::Halide(HalideUptake::hobr(IonPartner::Bromide)),
            )
            .on_surfaces(sulfate())
            .in_cloud(None)
            .in_stratosphere(strat(HetReaction::HOBrPlusHBr, 0.1, 0.3)),
        ),
        halide(
            "H8",
            "HOBr + HCl = BrCl + H2O",
            HetUptake::new(
                sr(97.0),
                UptakeGamma::Halide(HalideUptake::hobr(IonPartner::Chloride)),
            )
            .on_surfaces(sulfate())
            .in_cloud(None)
            .in_stratosphere(strat(HetReaction::HOBrPlusHCl, 0.1, 0.3)),
        ),
        halide(
            "H9",
            "HOCl + HCl = Cl2 + H2O",
            HetUptake::new(
                sr(52.5),
                UptakeGamma::Halide(HalideUptake::hocl(IonPartner::Chloride)),
            )
            .on_surfaces(sulfate())
            .in_cloud(None)
            .in_stratosphere(strat(HetReaction::HOClPlusHCl, 0.1, 0.2)),
        ),
        r(
            "H10",
            "ClNO3 = HOCl + HNO3",
            HetUptake::new(sr(97.5), fixed(0.02))
                .on_surfaces(aqueous())
                .in_cloud(None)
                .in_stratosphere(strat(HetReaction::ClNO3PlusH2O, 4.0e-3, 0.3)),
        ),
        r(
            "H11",
            "BrNO3 = HOBr + HNO3",
            HetUptake::new(sr(142.0), fixed(0.3))
                .on_surfaces(trop())
                .in_cloud(Some(0.3))
                .in_stratosphere(strat(HetReaction::BrNO3PlusH2O, 0.3, 0.3)),
        ),
        r(
            "H12",
            "ClNO3 + HCl = Cl2 + HNO3",
            HetUptake::new(sr(97.5), fixed(0.0))
                .in_stratosphere(strat(HetReaction::ClNO3PlusHCl, 0.2, 0.3))
                .limited(),
        ),
        // halide partners on sulfate and in cloud
        halide(
            "H13",
            "O3 + HBr = HOBr",
            HetUptake::new(sr(48.0), fixed(1.0e-6))
                .on_surfaces(sulfate())
                .in_cloud(None),
        ),
        halide(
            "H14",
            "HOI + HCl = ICl + H2O",
            HetUptake::new(sr(144.0), fixed(0.01))
                .on_surfaces(sulfate())
                .in_cloud(None),
        ),
        halide(
            "H15",
            "HOI + HBr = IBr + H2O",
            HetUptake::new(sr(144.0), fixed(0.01))
                .on_surfaces(sulfate())
                .in_cloud(None),
        ),
        r(
            "H16",
            "IONO + HCl = ICl + HNO2",
            HetUptake::new(sr(173.0), fixed(0.02))
                .on_surfaces(sulfate())
                .in_cloud(None)
                .limited(),
        ),
        r(
            "H17",
            "IONO + HBr = IBr + HNO2",
            HetUptake::new(sr(173.0), fixed(0.02))
                .on_surfaces(sulfate())
                .in_cloud(None)
                .limited(),
        ),
        r(
            "H18",
            "IONO2 + HCl = ICl + HNO3",
            HetUptake::new(sr(189.0), fixed(0.01))
                .on_surfaces(sulfate())
                .in_cloud(None)
                .limited(),
        ),
        r(
            "H19",
            "IONO2 + HBr = IBr + HNO3",
            HetUptake::new(sr(189.0), fixed(0.01))
                .on_surfaces(sulfate())
                .in_cloud(None)
                .limited(),
        ),
        // S(IV) oxidation by dissolved HOBr and HOCl in cloud water
        r(
            "H20",
            "HOBr + SO2 = HBr + SO4",
            HetUptake::new(
                sr(97.0),
                UptakeGamma::Halide(HalideUptake::hobr(IonPartner::Bisulfite)),
            )
            .in_cloud(None)
            .limited(),
        ),
        r(
            "H21",
            "HOCl + SO2 = HCl + SO4",
            HetUptake::new(
                sr(52.5),
                UptakeGamma::Halide(HalideUptake::hocl(IonPartner::Bisulfite)),
            )
            .in_cloud(None)
            .limited(),
        ),
        // reactive uptake to aerosol-phase products
        r(
            "H22",
            "GLYX = SOAGX",
            HetUptake::new(sr(58.0), fixed(2.9e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H23",
            "MGLY = SOAMG",
            HetUptake::new(sr(72.0), fixed(2.6e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H24",
            "IEPOXA = SOAIE",
            HetUptake::new(sr(118.0), fixed(1.0e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H25",
            "IEPOXD = SOAIE",
            HetUptake::new(sr(118.0), fixed(1.0e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H26",
            "HMML = SOAIE",
            HetUptake::new(sr(102.0), fixed(1.0e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H27",
            "IHN2 = IONITA",
            HetUptake::new(sr(147.0), fixed(5.0e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H28",
            "IHN4 = IONITA",
            HetUptake::new(sr(147.0), fixed(5.0e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H29",
            "IDN = 2 IONITA",
            HetUptake::new(sr(226.0), fixed(5.0e-3)).on_surfaces(sulfate()),
        ),
        r(
            "H30",
            "MONITS = MONITA",
            HetUptake::new(sr(215.0), fixed(1.0e-2))
                .on_surfaces(vec![AerosolType::Sulfate, AerosolType::OrganicCarbon]),
        ),
        r(
            "H31",
            "MONITU = MONITA",
            HetUptake::new(sr(215.0), fixed(1.0e-2))
                .on_surfaces(vec![AerosolType::Sulfate, AerosolType::OrganicCarbon]),
        ),
        r(
            "H32",
            "HNO3 = NIT",
            HetUptake::new(sr(63.0), fixed(0.1)).on_surfaces(dust),
        ),
        r(
            "H33",
            "IONO2 = HOI + HNO3",
            HetUptake::new(sr(189.0), fixed(0.01))
                .on_surfaces(trop())
                .in_cloud(None),
        ),
        r(
            "H34",
            "I2O2 = 2 AERI",
            HetUptake::new(sr(286.0), fixed(0.02))
                .on_surfaces(sulfate())
                .in_cloud(None),
        ),
        r(
            "H35",
            "I2O3 = 2 AERI",
            HetUptake::new(sr(302.0), fixed(0.02))
                .on_surfaces(sulfate())
                .in_cloud(None),
        ),
        r(
            "H36",
            "I2O4 = 2 AERI",
            HetUptake::new(sr(318.0), fixed(0.02))
                .on_surfaces(sulfate())
                .in_cloud(None),
        ),
    ];
    specs.extend(sea_salt_reactions(&FINE_SALT));
    specs.extend(sea_salt_reactions(&COARSE_SALT));
    specs
        .into_iter()
        .map(|s| s.in_set(ReactionSet::Heterogeneous))
        .collect()
}

/// heterogeneous reactions switched off in the standard mechanism
pub fn optional_het_reactions() -> Vec<ReactionSpec> {
    let specs = vec![
        halide(
            "HX1",
            "HOCl + HBr = BrCl + H2O",
            HetUptake::new(
                sr(52.5),
                UptakeGamma::Halide(HalideUptake::hocl(IonPartner::Bromide)),
            )
            .on_surfaces(sulfate())
            .in_cloud(None)
            .in_stratosphere(strat(HetReaction::HOClPlusHBr, 0.1, 0.3)),
        ),
        r(
            "HX2",
            "ClNO3 + HBr = BrCl + HNO3",
            HetUptake::new(sr(97.5), fixed(0.3))
                .on_surfaces(sulfate())
                .in_stratosphere(strat(HetReaction::ClNO3PlusHBr, 0.3, 0.3))
                .acid_gated()
                .limited(),
        ),
        r(
            "HX3",
            "BrNO3 + HCl = BrCl + HNO3",
            HetUptake::new(sr(142.0), fixed(0.0))
                .in_stratosphere(strat(HetReaction::BrNO3PlusHCl, 0.3, 0.3))
                .limited(),
        ),
    ];
    specs
        .into_iter()
        .map(|s| s.in_set(ReactionSet::OptionalHeterogeneous))
        .collect()
}
