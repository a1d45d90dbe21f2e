//! Per-grid-cell snapshot of aerosol and cloud surfaces and of their ionic composition.
//!
//! The state is recomputed by the host (aerosol microphysics and the stratospheric
//! sub-mechanism) once per integration step. Rate laws only read it.
//! Aerosol types and stratospheric heterogeneous reactions are closed enums, so every lookup
//! into the fixed-size arrays is bounds-checked at compile time.
use crate::Kinetics::errors::BuildError;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount, EnumIter};

/// aerosol and cloud surface types
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount,
)]
pub enum AerosolType {
    Dust1 = 0,
    Dust2 = 1,
    Dust3 = 2,
    Dust4 = 3,
    Dust5 = 4,
    Dust6 = 5,
    Dust7 = 6,
    Sulfate = 7,
    BlackCarbon = 8,
    OrganicCarbon = 9,
    SeaSaltFine = 10,
    SeaSaltCoarse = 11,
    /// stratospheric liquid aerosol
    StratLiquid = 12,
    /// irregular ice cloud (polar stratospheric cloud particles)
    IceCloud = 13,
}

pub const N_AEROSOL_TYPES: usize = <AerosolType as EnumCount>::COUNT;

impl AerosolType {
    pub const SS_FINE: AerosolType = AerosolType::SeaSaltFine;
    pub const SS_COARSE: AerosolType = AerosolType::SeaSaltCoarse;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_dust(self) -> bool {
        self.index() <= AerosolType::Dust7.index()
    }

    pub fn is_sea_salt(self) -> bool {
        matches!(self, AerosolType::SeaSaltFine | AerosolType::SeaSaltCoarse)
    }

    /// every type except the stratospheric ones
    pub fn tropospheric() -> Vec<AerosolType> {
        AerosolType::iter()
            .filter(|t| !matches!(t, AerosolType::StratLiquid | AerosolType::IceCloud))
            .collect()
    }

    /// aqueous surfaces able to carry halide chemistry
    pub fn aqueous() -> Vec<AerosolType> {
        vec![
            AerosolType::Sulfate,
            AerosolType::SeaSaltFine,
            AerosolType::SeaSaltCoarse,
        ]
    }
}

/// stratospheric heterogeneous reactions; index into `KHETI_SLA`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount,
)]
pub enum HetReaction {
    N2O5PlusH2O = 0,
    N2O5PlusHCl = 1,
    ClNO3PlusH2O = 2,
    ClNO3PlusHCl = 3,
    ClNO3PlusHBr = 4,
    BrNO3PlusH2O = 5,
    BrNO3PlusHCl = 6,
    HOClPlusHCl = 7,
    HOClPlusHBr = 8,
    HOBrPlusHCl = 9,
    HOBrPlusHBr = 10,
}

pub const N_HET_REACTIONS: usize = <HetReaction as EnumCount>::COUNT;

impl HetReaction {
    pub fn index(self) -> usize {
        self as usize
    }
}

/// aqueous media with their own ion composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum AqueousMedium {
    /// fine-mode sulfate-dominated aerosol
    FineAerosol,
    SeaSaltFine,
    SeaSaltCoarse,
    CloudLiquid,
}

impl AqueousMedium {
    /// medium carried by an aerosol surface, if the surface is aqueous
    pub fn of_aerosol(t: AerosolType) -> Option<AqueousMedium> {
        match t {
            AerosolType::Sulfate => Some(AqueousMedium::FineAerosol),
            AerosolType::SeaSaltFine => Some(AqueousMedium::SeaSaltFine),
            AerosolType::SeaSaltCoarse => Some(AqueousMedium::SeaSaltCoarse),
            _ => None,
        }
    }
}

/// ion molalities [mol/kg], treated as molar concentrations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct IonComposition {
    pub h_plus: f64,
    pub chloride: f64,
    pub bromide: f64,
    pub bisulfite: f64,
}

/// liquid and ice cloud geometry of the grid cell (in-cloud values)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CloudGeometry {
    /// cm2 cm-3
    pub liquid_area: f64,
    /// cm
    pub liquid_radius: f64,
    pub ice_area: f64,
    pub ice_radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HetChemState {
    /// surface area density per aerosol type [cm2 cm-3]
    area: [f64; N_AEROSOL_TYPES],
    /// effective radius per aerosol type [cm]
    radius: [f64; N_AEROSOL_TYPES],
    /// precomputed stratospheric liquid aerosol rates [s-1]
    kheti_sla: [f64; N_HET_REACTIONS],
    /// HO2 uptake coefficient supplied by the aerosol module
    pub gamma_ho2: f64,
    pub clear_fraction: f64,
    pub cloud_fraction: f64,
    pub cloud: CloudGeometry,
    fine_aerosol_ions: IonComposition,
    sea_salt_fine_ions: IonComposition,
    sea_salt_coarse_ions: IonComposition,
    cloud_ions: IonComposition,
    pub strat_box: bool,
    pub nat_surface: bool,
    pub ssa_is_acid: bool,
    pub ssc_is_acid: bool,
}

impl Default for HetChemState {
    fn default() -> Self {
        Self {
            area: [0.0; N_AEROSOL_TYPES],
            radius: [0.0; N_AEROSOL_TYPES],
            kheti_sla: [0.0; N_HET_REACTIONS],
            gamma_ho2: 0.2,
            clear_fraction: 1.0,
            cloud_fraction: 0.0,
            cloud: CloudGeometry::default(),
            fine_aerosol_ions: IonComposition::default(),
            sea_salt_fine_ions: IonComposition::default(),
            sea_salt_coarse_ions: IonComposition::default(),
            cloud_ions: IonComposition::default(),
            strat_box: false,
            nat_surface: false,
            ssa_is_acid: false,
            ssc_is_acid: false,
        }
    }
}

fn copy_checked<const N: usize>(field: &str, values: &[f64]) -> Result<[f64; N], BuildError> {
    if values.len() != N {
        return Err(BuildError::ArrayLength {
            field: field.to_string(),
            expected: N,
            found: values.len(),
        });
    }
    let mut out = [0.0; N];
    for (i, v) in values.iter().enumerate() {
        if !v.is_finite() || *v < 0.0 {
            return Err(BuildError::InvalidHetState(format!(
                "{}[{}] = {} must be finite and non-negative",
                field, i, v
            )));
        }
        out[i] = *v;
    }
    Ok(out)
}

impl HetChemState {
    /// Builds the state from per-type arrays. `area` and `radius` must have one entry per
    /// [`AerosolType`], `kheti_sla` one entry per [`HetReaction`].
    pub fn new(area: &[f64], radius: &[f64], kheti_sla: &[f64]) -> Result<Self, BuildError> {
        Ok(Self {
            area: copy_checked::<N_AEROSOL_TYPES>("area", area)?,
            radius: copy_checked::<N_AEROSOL_TYPES>("radius", radius)?,
            kheti_sla: copy_checked::<N_HET_REACTIONS>("KHETI_SLA", kheti_sla)?,
            ..Self::default()
        })
    }

    pub fn area(&self, t: AerosolType) -> f64 {
        self.area[t.index()]
    }

    pub fn radius(&self, t: AerosolType) -> f64 {
        self.radius[t.index()]
    }

    pub fn kheti_sla(&self, r: HetReaction) -> f64 {
        self.kheti_sla[r.index()]
    }

    pub fn total_area(&self) -> f64 {
        self.area.iter().sum()
    }

    pub fn ions(&self, medium: AqueousMedium) -> &IonComposition {
        match medium {
            AqueousMedium::FineAerosol => &self.fine_aerosol_ions,
            AqueousMedium::SeaSaltFine => &self.sea_salt_fine_ions,
            AqueousMedium::SeaSaltCoarse => &self.sea_salt_coarse_ions,
            AqueousMedium::CloudLiquid => &self.cloud_ions,
        }
    }

    /// acid-catalysed halide chemistry only runs on acidic media
    pub fn is_acidic(&self, medium: AqueousMedium) -> bool {
        match medium {
            AqueousMedium::SeaSaltFine => self.ssa_is_acid,
            AqueousMedium::SeaSaltCoarse => self.ssc_is_acid,
            AqueousMedium::FineAerosol | AqueousMedium::CloudLiquid => true,
        }
    }

    pub fn set_surface(
        &mut self,
        t: AerosolType,
        area: f64,
        radius: f64,
    ) -> Result<(), BuildError> {
        if !(area.is_finite() && radius.is_finite()) || area < 0.0 || radius < 0.0 {
            return Err(BuildError::InvalidHetState(format!(
                "surface {:?}: area {} and radius {} must be finite and non-negative",
                t, area, radius
            )));
        }
        self.area[t.index()] = area;
        self.radius[t.index()] = radius;
        Ok(())
    }

    pub fn set_kheti_sla(&mut self, r: HetReaction, k: f64) -> Result<(), BuildError> {
        if !k.is_finite() || k < 0.0 {
            return Err(BuildError::InvalidHetState(format!(
                "KHETI_SLA[{:?}] = {} must be finite and non-negative",
                r, k
            )));
        }
        self.kheti_sla[r.index()] = k;
        Ok(())
    }

    pub fn set_ions(&mut self, medium: AqueousMedium, ions: IonComposition) {
        match medium {
            AqueousMedium::FineAerosol => self.fine_aerosol_ions = ions,
            AqueousMedium::SeaSaltFine => self.sea_salt_fine_ions = ions,
            AqueousMedium::SeaSaltCoarse => self.sea_salt_coarse_ions = ions,
            AqueousMedium::CloudLiquid => self.cloud_ions = ions,
        }
    }

    pub fn with_cloud(mut self, cloud_fraction: f64, cloud: CloudGeometry) -> Self {
        self.cloud_fraction = cloud_fraction;
        self.clear_fraction = 1.0 - cloud_fraction;
        self.cloud = cloud;
        self
    }

    /// checks the scalar fields the constructor cannot see
    pub fn validate(&self) -> Result<(), BuildError> {
        for (name, f) in [
            ("clear_fraction", self.clear_fraction),
            ("cloud_fraction", self.cloud_fraction),
        ] {
            if !f.is_finite() || !(0.0..=1.0).contains(&f) {
                return Err(BuildError::InvalidHetState(format!(
                    "{} = {} must lie in [0, 1]",
                    name, f
                )));
            }
        }
        if !self.gamma_ho2.is_finite() || self.gamma_ho2 < 0.0 {
            return Err(BuildError::InvalidHetState(format!(
                "gamma_ho2 = {} must be finite and non-negative",
                self.gamma_ho2
            )));
        }
        for medium in AqueousMedium::iter() {
            let ions = self.ions(medium);
            for (name, v) in [
                ("H+", ions.h_plus),
                ("Cl-", ions.chloride),
                ("Br-", ions.bromide),
                ("HSO3-", ions.bisulfite),
            ] {
                if !v.is_finite() || v < 0.0 {
                    return Err(BuildError::InvalidHetState(format!(
                        "{} = {} in {:?} must be finite and non-negative",
                        name, v, medium
                    )));
                }
            }
        }
        let c = &self.cloud;
        for v in [c.liquid_area, c.liquid_radius, c.ice_area, c.ice_radius] {
            if !v.is_finite() || v < 0.0 {
                return Err(BuildError::InvalidHetState(
                    "cloud geometry must be finite and non-negative".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_sizes() {
        assert_eq!(N_AEROSOL_TYPES, 14);
        assert_eq!(N_HET_REACTIONS, 11);
        for (i, t) in AerosolType::iter().enumerate() {
            assert_eq!(t.index(), i);
        }
        for (i, r) in HetReaction::iter().enumerate() {
            assert_eq!(r.index(), i);
        }
    }

    #[test]
    fn test_new_rejects_wrong_lengths() {
        let r = HetChemState::new(&[0.0; 13], &[0.0; 14], &[0.0; 11]);
        assert_eq!(
            r,
            Err(BuildError::ArrayLength {
                field: "area".to_string(),
                expected: 14,
                found: 13
            })
        );
        let r = HetChemState::new(&[0.0; 14], &[0.0; 14], &[0.0; 12]);
        assert!(matches!(r, Err(BuildError::ArrayLength { .. })));
    }

    #[test]
    fn test_new_rejects_negative_area() {
        let mut area = [0.0; 14];
        area[3] = -1.0;
        let r = HetChemState::new(&area, &[0.0; 14], &[0.0; 11]);
        assert!(matches!(r, Err(BuildError::InvalidHetState(_))));
    }

    #[test]
    fn test_accessors() {
        let mut area = [0.0; 14];
        let mut radius = [0.0; 14];
        area[AerosolType::SS_COARSE.index()] = 2.0e-7;
        radius[AerosolType::SS_COARSE.index()] = 1.0e-4;
        let mut kheti = [0.0; 11];
        kheti[HetReaction::HOBrPlusHBr.index()] = 3.0e-5;
        let state = HetChemState::new(&area, &radius, &kheti).unwrap();
        assert_eq!(state.area(AerosolType::SeaSaltCoarse), 2.0e-7);
        assert_eq!(state.radius(AerosolType::SeaSaltCoarse), 1.0e-4);
        assert_eq!(state.kheti_sla(HetReaction::HOBrPlusHBr), 3.0e-5);
        assert_eq!(state.total_area(), 2.0e-7);
        assert_eq!(AerosolType::tropospheric().len(), 12);
        assert!(AerosolType::Dust5.is_dust());
        assert!(!AerosolType::Sulfate.is_dust());
    }

    #[test]
    fn test_validate_fractions() {
        let mut state = HetChemState::default();
        assert!(state.validate().is_ok());
        state.cloud_fraction = 1.5;
        assert!(state.validate().is_err());
        let state = HetChemState::default().with_cloud(0.3, CloudGeometry::default());
        assert!(state.validate().is_ok());
        assert!((state.clear_fraction - 0.7).abs() < 1e-15);
    }

    #[test]
    fn test_validate_ions() {
        for medium in AqueousMedium::iter() {
            let mut state = HetChemState::default();
            state.set_ions(
                medium,
                IonComposition {
                    bromide: f64::NAN,
                    ..IonComposition::default()
                },
            );
            assert!(matches!(
                state.validate(),
                Err(BuildError::InvalidHetState(_))
            ));
            state.set_ions(
                medium,
                IonComposition {
                    h_plus: -1.0e-5,
                    ..IonComposition::default()
                },
            );
            assert!(state.validate().is_err());
        }
    }
}
