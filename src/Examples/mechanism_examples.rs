use crate::Kinetics::environment::EnvironmentContext;
use crate::Kinetics::fullchem::{J_SLOTS, fullchem_table};
use crate::Kinetics::het_chem_state::{
    AerosolType, AqueousMedium, CloudGeometry, HetChemState, HetReaction, IonComposition,
};
use crate::Kinetics::mechanism::{Mechanism, MechanismOptions};
use crate::Kinetics::rate_law::RateCoefficient;
use crate::Kinetics::reaction_table::ReactionSet;
use crate::Kinetics::units::{StateBasis, ppb_factor};
use nalgebra::DVector;

/// marine boundary layer with sea salt, sulfate and a broken cloud deck
fn marine_het_state() -> HetChemState {
    let mut het = HetChemState::default();
    for (t, area, radius) in [
        (AerosolType::Sulfate, 5.0e-7, 1.5e-5),
        (AerosolType::SeaSaltFine, 2.0e-7, 5.0e-5),
        (AerosolType::SeaSaltCoarse, 1.0e-7, 1.0e-4),
    ] {
        if let Err(e) = het.set_surface(t, area, radius) {
            println!("{}", e);
        }
    }
    let sea_salt = IonComposition {
        h_plus: 1.0e-5,
        chloride: 3.0,
        bromide: 5.0e-3,
        bisulfite: 0.0,
    };
    het.set_ions(AqueousMedium::SeaSaltFine, sea_salt);
    het.set_ions(AqueousMedium::SeaSaltCoarse, sea_salt);
    het.set_ions(
        AqueousMedium::CloudLiquid,
        IonComposition {
            h_plus: 1.0e-5,
            chloride: 1.0e-4,
            bromide: 1.0e-6,
            bisulfite: 1.0e-6,
        },
    );
    het.ssa_is_acid = true;
    het.with_cloud(
        0.3,
        CloudGeometry {
            liquid_area: 1.0e-5,
            liquid_radius: 1.0e-3,
            ice_area: 0.0,
            ice_radius: 0.0,
        },
    )
}

fn surface_env() -> EnvironmentContext {
    EnvironmentContext::new(288.0, 2.5e19)
        .with_humidity(80.0, 4.0e17)
        .with_j_values(vec![1.0e-5; J_SLOTS.len()])
        .with_het(marine_het_state())
}

fn background_state(m: &Mechanism) -> DVector<f64> {
    let mut c = DVector::from_element(m.n_species(), 1.0e-3);
    for (name, ppb) in [
        ("N2", 7.808e8),
        ("O2", 2.095e8),
        ("H2O", 1.6e7),
        ("O3", 30.0),
        ("NO", 0.05),
        ("NO2", 0.2),
        ("CO", 100.0),
        ("CH4", 1900.0),
        ("H2", 500.0),
        ("ISOP", 0.5),
        ("DMS", 0.1),
        ("SALACL", 1.0),
        ("HCl", 0.1),
        ("HBr", 1.0e-3),
    ] {
        if let Some(i) = m.species_index(name) {
            c[i] = ppb;
        }
    }
    c
}

pub fn mechanism_examples(task: usize) {
    match task {
        0 => {
            // STOICHIOMETRIC ANALYSIS
            use crate::Kinetics::stoichiometry_analyzer::{parse_equation, stoich_matrix};
            let equations = ["O3 + NO = NO2 + O2", "2 HO2 = H2O2 + O2", "NO2 = NO + O"];
            let parsed: Vec<_> = equations
                .iter()
                .enumerate()
                .filter_map(|(i, eq)| parse_equation(&format!("R{}", i + 1), eq).ok())
                .collect();
            let species: Vec<String> = ["O3", "NO", "NO2", "O2", "HO2", "H2O2", "O"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            println!("{}", stoich_matrix(&species, &parsed));
        }
        1 => {
            // RATE COEFFICIENTS OVER A TEMPERATURE PROFILE
            let table = fullchem_table();
            for id in ["R14", "R15", "R25", "R34", "R71", "H4"] {
                let Some(spec) = table.find(id) else { continue };
                print!("{:>4} {:<16}", id, spec.rate.family());
                for t in [200.0, 250.0, 298.0] {
                    let env = EnvironmentContext::new(t, 2.5e19 * 250.0 / t)
                        .with_het(marine_het_state());
                    print!(" {:>12.4e}", spec.rate.k(&env));
                }
                println!();
            }
        }
        2 => {
            // BUILT-IN MECHANISM AND ONE RHS EVALUATION
            let mechanism = match Mechanism::build(&fullchem_table(), &MechanismOptions::default())
            {
                Ok(m) => m,
                Err(e) => {
                    println!("{}", e);
                    return;
                }
            };
            let env = surface_env();
            mechanism.pretty_print(Some(&env));
            let c = background_state(&mechanism);
            match mechanism.rhs(0.0, &c, &env) {
                Ok(dcdt) => {
                    for name in ["O3", "OH", "HO2", "NO2", "HNO3", "Cl2", "BrCl"] {
                        if let Some(i) = mechanism.species_index(name) {
                            println!("d[{}]/dt = {:.4e} ppb/s", name, dcdt[i]);
                        }
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        3 => {
            // MANY GRID CELLS IN PARALLEL, MOLECULE BASIS
            let options = MechanismOptions::default()
                .with_basis(StateBasis::MoleculeCm3)
                .with_set(ReactionSet::OptionalHeterogeneous);
            let Ok(mechanism) = Mechanism::build(&fullchem_table(), &options) else {
                return;
            };
            let columns: Vec<(DVector<f64>, EnvironmentContext)> = (0..32)
                .map(|level| {
                    let t = 288.0 - 2.0 * level as f64;
                    let m = 2.5e19 * (-(level as f64) / 16.0).exp();
                    let mut env = surface_env();
                    env.temperature = t;
                    env.number_density = m;
                    env.het.strat_box = level > 24;
                    if env.het.strat_box {
                        if let Err(e) = env.het.set_kheti_sla(HetReaction::N2O5PlusH2O, 1.0e-5) {
                            println!("{}", e);
                        }
                    }
                    let c = background_state(&mechanism) * ppb_factor(m);
                    (c, env)
                })
                .collect();
            match mechanism.rhs_columns(0.0, &columns) {
                Ok(out) => {
                    let o3 = mechanism.species_index("O3").unwrap_or(0);
                    for (level, d) in out.iter().enumerate() {
                        println!("level {:>2}: d[O3]/dt = {:.4e} molec/cm3/s", level, d[o3]);
                    }
                }
                Err(e) => println!("{}", e),
            }
        }
        4 => {
            // JSON ROUND TRIP OF THE MECHANISM
            use crate::Utils::load_from_file::{load_mechanism, save_mechanism};
            let path = std::env::temp_dir().join("fullchem.json");
            let Some(path) = path.to_str() else { return };
            if let Err(e) = save_mechanism(&fullchem_table(), path) {
                println!("{}", e);
                return;
            }
            match load_mechanism(path) {
                Ok(table) => println!(
                    "{} species, {} reactions read back",
                    table.species.len(),
                    table.reactions.len()
                ),
                Err(e) => println!("{}", e),
            }
        }
        _ => {
            println!("no example with number {}", task);
        }
    }
}
