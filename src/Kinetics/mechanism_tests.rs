/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::environment::EnvironmentContext;
    use crate::Kinetics::errors::{BuildError, EvaluationError};
    use crate::Kinetics::fullchem::{J_SLOTS, fullchem_table};
    use crate::Kinetics::gas_rate_laws::{Arrhenius, ConstantRate, Photolysis};
    use crate::Kinetics::het_chem_state::{
        AerosolType, AqueousMedium, HetChemState, HetReaction, IonComposition,
    };
    use crate::Kinetics::het_rate_laws::{
        HalideUptake, HetUptake, IonPartner, StratUptake, UptakeGamma,
    };
    use crate::Kinetics::mechanism::{Mechanism, MechanismOptions};
    use crate::Kinetics::rate_law::RateCoefficient;
    use crate::Kinetics::reaction_table::{ReactionSet, ReactionSpec, ReactionTable, Species};
    use crate::Kinetics::units::{StateBasis, ppb_factor};
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, DVector};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use strum::IntoEnumIterator;

    fn small_table() -> ReactionTable {
        let species = vec![
            Species::new("NO"),
            Species::new("NO2"),
            Species::new("O3"),
            Species::new("N2O5"),
            Species::new("HNO3"),
            Species::new("SALACL"),
            Species::new("HOBr"),
            Species::new("HBr"),
            Species::new("Br2"),
            Species::fixed("O2"),
        ];
        let reactions = vec![
            ReactionSpec::new("R1", "O3 + NO = NO2 + O2", Arrhenius::ac(3.0e-12, -1500.0)),
            ReactionSpec::new(
                "R2",
                "2 NO2 = N2O5",
                Arrhenius::new(1.0e-14, 0.0, 0.0),
            ),
            ReactionSpec::new(
                "J1",
                "NO2 = NO + O3",
                Photolysis {
                    index: 0,
                    factor: 1.0,
                },
            )
            .in_set(ReactionSet::Photolysis),
            ReactionSpec::new(
                "H1",
                "N2O5 + SALACL = 2 HNO3 + SALACL",
                HetUptake::new(108.0_f64.sqrt(), UptakeGamma::Fixed { gamma: 0.1 })
                    .on_surfaces(vec![AerosolType::SeaSaltFine]),
            )
            .divided_by("SALACL")
            .in_set(ReactionSet::Heterogeneous),
            ReactionSpec::new(
                "H2",
                "HOBr + HBr = Br2",
                HetUptake::new(97.0_f64.sqrt(), UptakeGamma::Fixed { gamma: 0.0 })
                    .in_stratosphere(StratUptake {
                        reaction: HetReaction::HOBrPlusHBr,
                        nat_gamma: 0.1,
                        ice_gamma: 0.3,
                    })
                    .limited(),
            )
            .in_set(ReactionSet::Heterogeneous),
        ];
        ReactionTable::new(species, reactions)
    }

    fn small_env() -> EnvironmentContext {
        let mut het = HetChemState::default();
        het.set_surface(AerosolType::SeaSaltFine, 1.0e-6, 1.0e-4).unwrap();
        het.set_surface(AerosolType::IceCloud, 1.0e-7, 1.0e-3).unwrap();
        het.set_kheti_sla(HetReaction::HOBrPlusHBr, 1.0e-3).unwrap();
        het.strat_box = true;
        EnvironmentContext::new(250.0, 5.0e18)
            .with_j_values(vec![1.0e-2])
            .with_het(het)
    }

    fn mlc_options() -> MechanismOptions {
        MechanismOptions::default().with_basis(StateBasis::MoleculeCm3)
    }

    fn position(m: &Mechanism, id: &str) -> usize {
        m.reaction_ids().iter().position(|&r| r == id).unwrap()
    }

    fn small_state(m: &Mechanism) -> DVector<f64> {
        let mut c = DVector::zeros(m.n_species());
        for (name, v) in [
            ("NO", 2.0e10),
            ("NO2", 5.0e10),
            ("O3", 1.0e12),
            ("N2O5", 3.0e9),
            ("HNO3", 1.0e10),
            ("SALACL", 4.0e8),
            ("HOBr", 2.0e7),
            ("HBr", 6.0e7),
            ("O2", 1.05e18),
        ] {
            c[m.species_index(name).unwrap()] = v;
        }
        c
    }

    fn loaded_env(rng: &mut StdRng) -> EnvironmentContext {
        let mut het = HetChemState::default();
        for t in AerosolType::iter() {
            het.set_surface(
                t,
                rng.gen_range(1.0e-8..1.0e-6),
                rng.gen_range(1.0e-6..1.0e-4),
            )
            .unwrap();
        }
        for r in HetReaction::iter() {
            het.set_kheti_sla(r, 1.0e-5).unwrap();
        }
        for medium in AqueousMedium::iter() {
            het.set_ions(
                medium,
                IonComposition {
                    h_plus: 1.0e-3,
                    chloride: 0.5,
                    bromide: 1.0e-3,
                    bisulfite: 1.0e-6,
                },
            );
        }
        het.ssa_is_acid = true;
        let t = rng.gen_range(200.0..310.0);
        let m = rng.gen_range(1.0e18..2.6e19);
        EnvironmentContext::new(t, m)
            .with_humidity(60.0, m * 0.005)
            .with_j_values((0..J_SLOTS.len()).map(|i| 1.0e-5 * (1.0 + i as f64)).collect())
            .with_het(het)
    }

    fn random_state(m: &Mechanism, rng: &mut StdRng) -> DVector<f64> {
        DVector::from_fn(m.n_species(), |_, _| rng.gen_range(0.0..50.0))
    }

    ////////////////////////////////BUILD CHECKS////////////////////////////////////////
    #[test]
    fn test_undeclared_species_rejected_at_build() {
        let mut table = small_table();
        table.reactions.push(ReactionSpec::new(
            "R9",
            "O3 + XYZ = NO2",
            Arrhenius::ac(1.0e-12, 0.0),
        ));
        match Mechanism::build(&table, &MechanismOptions::default()) {
            Err(BuildError::UndeclaredSpecies { reaction, species }) => {
                assert_eq!(reaction, "R9");
                assert_eq!(species, "XYZ");
            }
            other => panic!("unexpected {:?}", other.map(|m| m.n_reactions())),
        }
    }

    #[test]
    fn test_duplicates_rejected() {
        let mut table = small_table();
        table.species.push(Species::new("NO"));
        assert!(matches!(
            Mechanism::build(&table, &MechanismOptions::default()),
            Err(BuildError::DuplicateSpecies(s)) if s == "NO"
        ));
        let mut table = small_table();
        let again = table.reactions[0].clone();
        table.reactions.push(again);
        assert!(matches!(
            Mechanism::build(&table, &MechanismOptions::default()),
            Err(BuildError::DuplicateReaction(s)) if s == "R1"
        ));
    }

    #[test]
    fn test_order_mismatch_rejected() {
        let mut table = small_table();
        table.reactions.push(ReactionSpec::new(
            "J2",
            "NO2 + O3 = NO",
            Photolysis {
                index: 0,
                factor: 1.0,
            },
        ));
        assert!(matches!(
            Mechanism::build(&table, &MechanismOptions::default()),
            Err(BuildError::InconsistentStoichiometry { reaction, .. }) if reaction == "J2"
        ));
    }

    #[test]
    fn test_bad_divisor_and_limited_shape_rejected() {
        let mut table = small_table();
        table.reactions[0] = table.reactions[0].clone().divided_by("NO");
        assert!(matches!(
            Mechanism::build(&table, &MechanismOptions::default()),
            Err(BuildError::InconsistentStoichiometry { .. })
        ));

        let mut table = small_table();
        table.reactions.push(ReactionSpec::new(
            "H3",
            "2 HOBr = Br2",
            HetUptake::new(1.0, UptakeGamma::Fixed { gamma: 0.1 }).limited(),
        ));
        assert!(matches!(
            Mechanism::build(&table, &MechanismOptions::default()),
            Err(BuildError::InconsistentStoichiometry { reaction, .. }) if reaction == "H3"
        ));

        let mut table = small_table();
        table.reactions.push(ReactionSpec::new(
            "R9",
            "0.5 NO2 = NO",
            Arrhenius::ac(1.0e-12, 0.0),
        ));
        assert!(Mechanism::build(&table, &MechanismOptions::default()).is_err());
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        let mut table = small_table();
        table
            .reactions
            .push(ReactionSpec::new("R9", "NO = NO2", ConstantRate { k: f64::INFINITY }));
        assert!(matches!(
            Mechanism::build(&table, &MechanismOptions::default()),
            Err(BuildError::InvalidParameters { reaction, .. }) if reaction == "R9"
        ));
    }

    #[test]
    fn test_reaction_sets_filter() {
        let table = small_table();
        let gas_only = MechanismOptions {
            enabled_sets: vec![ReactionSet::Gas],
            ..MechanismOptions::default()
        };
        let m = Mechanism::build(&table, &gas_only).unwrap();
        assert_eq!(m.reaction_ids(), vec!["R1", "R2"]);
        // no photolysis compiled, so no j-values needed
        let env = EnvironmentContext::default();
        assert!(m.rhs(0.0, &small_state(&m), &env).is_ok());
    }

    #[test]
    fn test_optional_het_disabled_by_default() {
        let table = fullchem_table();
        let m = Mechanism::build(&table, &MechanismOptions::default()).unwrap();
        let ids = m.reaction_ids();
        for spec in table.reactions_in(ReactionSet::OptionalHeterogeneous) {
            assert!(!ids.contains(&spec.id.as_str()));
        }
        assert!(ids.contains(&"H7"));
        let m = Mechanism::build(
            &table,
            &MechanismOptions::default().with_set(ReactionSet::OptionalHeterogeneous),
        )
        .unwrap();
        assert!(m.reaction_ids().contains(&"HX1"));
    }

    ////////////////////////////////EVALUATION////////////////////////////////////////
    #[test]
    fn test_mass_action_rate() {
        let m = Mechanism::build(&small_table(), &mlc_options()).unwrap();
        let env = small_env();
        let c = small_state(&m);
        let k = m.rate_coefficients(&env).unwrap();
        let rates = m.reaction_rates(&c, &env).unwrap();
        let no = m.species_index("NO").unwrap();
        let o3 = m.species_index("O3").unwrap();
        let no2 = m.species_index("NO2").unwrap();
        let r1 = position(&m, "R1");
        assert_relative_eq!(rates[r1], k[r1] * c[o3] * c[no], max_relative = 1e-12);
        let r2 = position(&m, "R2");
        assert_relative_eq!(rates[r2], k[r2] * c[no2] * c[no2], max_relative = 1e-12);
        let j1 = position(&m, "J1");
        assert_relative_eq!(rates[j1], 1.0e-2 * c[no2], max_relative = 1e-12);
    }

    #[test]
    fn test_catalytic_divisor() {
        let m = Mechanism::build(&small_table(), &mlc_options()).unwrap();
        let env = small_env();
        let mut c = small_state(&m);
        let h1 = position(&m, "H1");
        let k = m.rate_coefficients(&env).unwrap()[h1];
        assert!(k > 0.0);
        let n2o5 = m.species_index("N2O5").unwrap();
        let salacl = m.species_index("SALACL").unwrap();
        assert_eq!(m.reaction_order("H1"), Some(1));

        let rates = m.reaction_rates(&c, &env).unwrap();
        // R = (k / [D]) [D] [N2O5]
        assert_relative_eq!(rates[h1], k * c[n2o5], max_relative = 1e-12);
        let dcdt = m.rhs(0.0, &c, &env).unwrap();
        assert_eq!(dcdt[salacl], 0.0);

        c[salacl] = 0.0;
        let rates = m.reaction_rates(&c, &env).unwrap();
        assert_eq!(rates[h1], 0.0);

        let s = m.stoichiometric_matrix();
        assert_eq!(s[(salacl, h1)], 0.0);
        assert_eq!(s[(n2o5, h1)], -1.0);
    }

    #[test]
    fn test_divisor_at_tiny_concentration() {
        let table = ReactionTable::new(
            vec![Species::new("A"), Species::new("D"), Species::new("P")],
            vec![
                ReactionSpec::new("R1", "A + D = P + D", ConstantRate { k: 1.0 })
                    .divided_by("D"),
            ],
        );
        let m = Mechanism::build(&table, &mlc_options()).unwrap();
        let env = EnvironmentContext::default();
        for d in [1.0, 1.0e-320] {
            let c = DVector::from_vec(vec![1.0, d, 0.0]);
            let dcdt = m.rhs(0.0, &c, &env).unwrap();
            assert_eq!(dcdt.as_slice(), &[-1.0, 0.0, 1.0]);
        }
        let c = DVector::from_vec(vec![1.0, f64::NAN, 0.0]);
        assert!(matches!(
            m.rhs(0.0, &c, &env),
            Err(EvaluationError::NonFiniteRate { .. })
        ));
    }

    #[test]
    fn test_nan_ion_composition_aborts() {
        let uptake = HetUptake::new(
            97.0_f64.sqrt(),
            UptakeGamma::Halide(HalideUptake::hobr(IonPartner::Bromide)),
        )
        .on_surfaces(vec![AerosolType::Sulfate])
        .limited();
        let table = ReactionTable::new(
            vec![Species::new("HOBr"), Species::new("HBr"), Species::new("Br2")],
            vec![
                ReactionSpec::new("H1", "HOBr + HBr = Br2", uptake.clone())
                    .in_set(ReactionSet::Heterogeneous),
            ],
        );
        let m = Mechanism::build(&table, &mlc_options()).unwrap();
        let mut het = HetChemState::default();
        het.set_surface(AerosolType::Sulfate, 1.0e-6, 1.0e-5).unwrap();
        let ions = IonComposition {
            h_plus: 1.0e-3,
            chloride: 0.1,
            bromide: 1.0e-3,
            bisulfite: 0.0,
        };
        het.set_ions(AqueousMedium::FineAerosol, ions);
        let env = EnvironmentContext::new(280.0, 2.0e19).with_het(het);
        let c = DVector::from_vec(vec![1.0e8, 1.0e8, 0.0]);
        let dcdt = m.rhs(0.0, &c, &env).unwrap();
        assert!(dcdt[0] < 0.0);

        // the rate law itself keeps the NaN instead of flooring it to zero
        let mut bad = env.clone();
        bad.het.set_ions(
            AqueousMedium::FineAerosol,
            IonComposition {
                bromide: f64::NAN,
                ..ions
            },
        );
        assert!(uptake.k(&bad).is_nan());
        assert!(matches!(
            m.rhs(0.0, &c, &bad),
            Err(EvaluationError::InvalidEnvironment(_))
        ));
    }

    #[test]
    fn test_fixed_species_have_no_tendency() {
        let m = Mechanism::build(&small_table(), &mlc_options()).unwrap();
        let env = small_env();
        let dcdt = m.rhs(0.0, &small_state(&m), &env).unwrap();
        assert_eq!(dcdt[m.species_index("O2").unwrap()], 0.0);

        let fm = Mechanism::build(&fullchem_table(), &MechanismOptions::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let env = loaded_env(&mut rng);
        let dcdt = fm.rhs(0.0, &random_state(&fm, &mut rng), &env).unwrap();
        for (i, s) in fm.species().iter().enumerate() {
            if s.fixed {
                assert_eq!(dcdt[i], 0.0, "{}", s.name);
            }
        }
    }

    #[test]
    fn test_limited_rate() {
        let m = Mechanism::build(&small_table(), &mlc_options()).unwrap();
        let env = small_env();
        let mut c = small_state(&m);
        let h2 = position(&m, "H2");
        let k_i = m.rate_coefficients(&env).unwrap()[h2];
        let hobr = m.species_index("HOBr").unwrap();
        let hbr = m.species_index("HBr").unwrap();
        let rates = m.reaction_rates(&c, &env).unwrap();
        // kI / max(X, Y) * X * Y: bounded by the less abundant reactant
        assert_relative_eq!(rates[h2], k_i * c[hobr].min(c[hbr]), max_relative = 1e-12);

        c[hbr] = 50.0;
        let rates = m.reaction_rates(&c, &env).unwrap();
        assert_eq!(rates[h2], 0.0);
    }

    #[test]
    fn test_ppb_and_molecule_basis_agree() {
        let table = fullchem_table();
        let ppb = Mechanism::build(&table, &MechanismOptions::default()).unwrap();
        let mlc = Mechanism::build(&table, &mlc_options()).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..5 {
            let env = loaded_env(&mut rng);
            let c_ppb = random_state(&ppb, &mut rng);
            let f = ppb_factor(env.number_density);
            let c_mlc = &c_ppb * f;
            let d_ppb = ppb.rhs(0.0, &c_ppb, &env).unwrap();
            let d_mlc = mlc.rhs(0.0, &c_mlc, &env).unwrap();
            let scale = d_mlc.amax();
            for i in 0..ppb.n_species() {
                assert_relative_eq!(
                    d_ppb[i] * f,
                    d_mlc[i],
                    epsilon = 1e-12 * scale,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_parallel_rhs_matches_serial() {
        let m = Mechanism::build(&fullchem_table(), &MechanismOptions::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let env = loaded_env(&mut rng);
        let c = random_state(&m, &mut rng);
        let serial = m.rhs(0.0, &c, &env).unwrap();
        let parallel = m.rhs_parallel(0.0, &c, &env).unwrap();
        let scale = serial.amax();
        for i in 0..m.n_species() {
            assert_relative_eq!(serial[i], parallel[i], epsilon = 1e-12 * scale);
        }
    }

    #[test]
    fn test_rhs_columns() {
        let m = Mechanism::build(&fullchem_table(), &MechanismOptions::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let columns: Vec<(DVector<f64>, EnvironmentContext)> = (0..6)
            .map(|_| {
                let env = loaded_env(&mut rng);
                (random_state(&m, &mut rng), env)
            })
            .collect();
        let out = m.rhs_columns(0.0, &columns).unwrap();
        assert_eq!(out.len(), columns.len());
        for ((c, env), d) in columns.iter().zip(&out) {
            assert_eq!(&m.rhs(0.0, c, env).unwrap(), d);
        }
    }

    #[test]
    fn test_jacobian_matches_finite_differences() {
        let m = Mechanism::build(&small_table(), &mlc_options()).unwrap();
        let env = small_env();
        let c = small_state(&m);
        let jac = m.jacobian(0.0, &c, &env).unwrap().to_dense();
        let n = m.n_species();
        let mut fd = DMatrix::zeros(n, n);
        for j in 0..n {
            let h = 1.0e-6 * c[j].abs().max(1.0);
            let mut plus = c.clone();
            let mut minus = c.clone();
            plus[j] += h;
            minus[j] -= h;
            let d = (m.rhs(0.0, &plus, &env).unwrap() - m.rhs(0.0, &minus, &env).unwrap())
                / (2.0 * h);
            fd.set_column(j, &d);
        }
        let scale = fd.amax();
        for i in 0..n {
            for j in 0..n {
                assert_relative_eq!(
                    jac[(i, j)],
                    fd[(i, j)],
                    epsilon = 1e-6 * scale,
                    max_relative = 1e-4
                );
            }
        }
    }

    #[test]
    fn test_inject_source_terms() {
        let m = Mechanism::build(&small_table(), &mlc_options()).unwrap();
        let env = small_env();
        let c = small_state(&m);
        let mut dcdt = m.rhs(0.0, &c, &env).unwrap();
        let before = dcdt.clone();
        let no = m.species_index("NO").unwrap();
        m.inject_source_terms(&mut dcdt, &[(no, 1.0e5), (no, 1.0e5)])
            .unwrap();
        assert_relative_eq!(dcdt[no], before[no] + 2.0e5);
        assert!(matches!(
            m.inject_source_terms(&mut dcdt, &[(99, 1.0)]),
            Err(EvaluationError::UnknownSpeciesIndex { index: 99, .. })
        ));
    }

    ////////////////////////////////EVALUATION ERRORS////////////////////////////////////////
    #[test]
    fn test_missing_j_value() {
        let m = Mechanism::build(&small_table(), &MechanismOptions::default()).unwrap();
        let env = small_env().with_j_values(Vec::new());
        match m.rhs(0.0, &small_state(&m), &env) {
            Err(EvaluationError::MissingJValue {
                reaction,
                index,
                available,
            }) => {
                assert_eq!(reaction, "J1");
                assert_eq!(index, 0);
                assert_eq!(available, 0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_rate_aborts() {
        let mut table = small_table();
        // finite at the reference temperature, overflows in the cold
        table.reactions.push(ReactionSpec::new(
            "R9",
            "NO = NO2",
            Arrhenius::ac(1.0e-12, 2.0e5),
        ));
        let m = Mechanism::build(&table, &MechanismOptions::default()).unwrap();
        let env = EnvironmentContext {
            temperature: 200.0,
            ..small_env()
        };
        assert!(matches!(
            m.rhs(0.0, &small_state(&m), &env),
            Err(EvaluationError::NonFiniteRate { reaction, .. }) if reaction == "R9"
        ));

        let m = Mechanism::build(&small_table(), &mlc_options()).unwrap();
        let mut c = small_state(&m);
        c[m.species_index("O3").unwrap()] = 1.0e300;
        c[m.species_index("NO").unwrap()] = 1.0e300;
        assert!(matches!(
            m.rhs(0.0, &c, &small_env()),
            Err(EvaluationError::NonFiniteRate { reaction, .. }) if reaction == "R1"
        ));
    }

    #[test]
    fn test_bad_inputs() {
        let m = Mechanism::build(&small_table(), &MechanismOptions::default()).unwrap();
        let short = DVector::zeros(3);
        assert!(matches!(
            m.rhs(0.0, &short, &small_env()),
            Err(EvaluationError::StateLength {
                expected: 10,
                found: 3
            })
        ));
        let env = EnvironmentContext {
            temperature: -5.0,
            ..small_env()
        };
        assert!(matches!(
            m.rhs(0.0, &small_state(&m), &env),
            Err(EvaluationError::InvalidEnvironment(_))
        ));
        let mut dcdt = vec![0.0; 4];
        assert!(
            m.rhs_into(0.0, small_state(&m).as_slice(), &small_env(), &mut dcdt)
                .is_err()
        );
    }

    #[test]
    fn test_fullchem_finite_and_printable() {
        let m = Mechanism::build(&fullchem_table(), &MechanismOptions::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let env = loaded_env(&mut rng);
        let dcdt = m.rhs(0.0, &random_state(&m, &mut rng), &env).unwrap();
        assert!(dcdt.iter().all(|v| v.is_finite()));
        let jac = m.jacobian(0.0, &random_state(&m, &mut rng), &env).unwrap();
        assert!(jac.nnz() > 0);
        assert!(jac.triplets.iter().all(|(_, _, v)| v.is_finite()));
        m.pretty_print(Some(&env));
    }
}
