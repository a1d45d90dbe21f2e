/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::environment::EnvironmentContext;
    use crate::Kinetics::fullchem::{J_SLOTS, fullchem_table};
    use crate::Kinetics::gas_rate_laws::*;
    use crate::Kinetics::het_chem_state::{
        AerosolType, AqueousMedium, CloudGeometry, HetChemState, HetReaction, IonComposition,
    };
    use crate::Kinetics::rate_law::{RateCoefficient, RateLaw};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use strum::IntoEnumIterator;

    const TEMPERATURES: [f64; 6] = [180.0, 200.0, 230.0, 260.0, 298.15, 320.0];
    const DENSITIES: [f64; 5] = [1.0e10, 1.0e13, 1.0e16, 1.0e18, 3.0e19];

    fn loaded_het_state() -> HetChemState {
        let mut het = HetChemState::default();
        for (i, t) in AerosolType::iter().enumerate() {
            het.set_surface(t, 1.0e-7 * (1.0 + i as f64), 1.0e-5 * (1.0 + i as f64))
                .unwrap();
        }
        for r in HetReaction::iter() {
            het.set_kheti_sla(r, 1.0e-6).unwrap();
        }
        let ions = IonComposition {
            h_plus: 1.0e-4,
            chloride: 1.0,
            bromide: 2.0e-3,
            bisulfite: 1.0e-7,
        };
        for m in AqueousMedium::iter() {
            het.set_ions(m, ions);
        }
        het.ssa_is_acid = true;
        het.ssc_is_acid = true;
        het.strat_box = true;
        het.with_cloud(
            0.25,
            CloudGeometry {
                liquid_area: 2.0e-5,
                liquid_radius: 1.0e-3,
                ice_area: 5.0e-6,
                ice_radius: 5.0e-3,
            },
        )
    }

    fn grid_envs() -> Vec<EnvironmentContext> {
        let mut envs = Vec::new();
        for &t in &TEMPERATURES {
            for &m in &DENSITIES {
                envs.push(
                    EnvironmentContext::new(t, m)
                        .with_humidity(65.0, m * 0.01)
                        .with_j_values(vec![1.0e-5; J_SLOTS.len()])
                        .with_het(loaded_het_state()),
                );
            }
        }
        envs
    }

    #[test]
    fn test_every_mechanism_rate_law_is_finite_and_non_negative() {
        let table = fullchem_table();
        for env in grid_envs() {
            for r in &table.reactions {
                let k = r.rate.k(&env);
                assert!(
                    k.is_finite() && k >= 0.0,
                    "reaction {} gave k = {} at T = {}, M = {}",
                    r.id,
                    k,
                    env.temperature,
                    env.number_density
                );
            }
        }
    }

    #[test]
    fn test_jpl_falloff_between_limits() {
        let law = JplFalloff::abab(1.8e-30, 3.0, 2.8e-11, 0.0, 0.6);
        for env in grid_envs() {
            let k = law.k(&env);
            assert!(k <= law.k_low(&env) && k <= law.k_high(&env));
        }
    }

    fn random_env(rng: &mut StdRng) -> EnvironmentContext {
        let t = rng.gen_range(180.0..320.0);
        let m = 10f64.powf(rng.gen_range(10.0..19.5));
        EnvironmentContext::new(t, m)
    }

    fn assert_pair(a: &RateLaw, b: &RateLaw, parent: f64, env: &EnvironmentContext) {
        let sum = a.k(env) + b.k(env);
        assert_relative_eq!(sum, parent, max_relative = 1e-9);
    }

    #[test]
    fn test_ro2no_branch_pairs_sum_to_parent() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..40 {
            let env = random_env(&mut rng);
            let a0 = 10f64.powf(rng.gen_range(-13.0..-11.0));
            let c0 = rng.gen_range(0.0..600.0);
            let n = rng.gen_range(1.0..12.0);
            let nitrate = Ro2NoNitrate {
                a0,
                c0,
                n_carbon: n,
                branch: Branch::A,
            };
            let alkoxy = Ro2NoNitrate {
                branch: Branch::B,
                ..nitrate
            };
            assert_pair(
                &nitrate.into(),
                &alkoxy.into(),
                nitrate.parent_k(&env),
                &env,
            );
            let fixed = Ro2NoFixedYield {
                a0,
                c0,
                branch: Branch::A,
            };
            let other = Ro2NoFixedYield {
                branch: Branch::B,
                ..fixed
            };
            assert_pair(&fixed.into(), &other.into(), fixed.parent_k(&env), &env);
        }
    }

    #[test]
    fn test_ro2ho2_and_isoprene_pairs_sum_to_parent() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..40 {
            let env = random_env(&mut rng);
            let a = Ro2Ho2 {
                a0: 2.91e-13,
                c0: rng.gen_range(0.0..1300.0),
                n_carbon: rng.gen_range(1.0..15.0),
                branch: Branch::A,
            };
            let b = Ro2Ho2 {
                branch: Branch::B,
                ..a
            };
            assert_pair(&a.into(), &b.into(), a.parent_k(&env), &env);

            let iso1 = IsopreneBranch {
                a0: 10f64.powf(rng.gen_range(-12.0..-10.0)),
                b0: rng.gen_range(0.0..500.0),
                c0: rng.gen_range(0.0..1.0),
                d0: 10f64.powf(rng.gen_range(-20.0..-15.0)),
                e0: rng.gen_range(8000.0..12000.0),
                f0: 10f64.powf(rng.gen_range(8.0..12.0)),
                g0: rng.gen_range(-8000.0..-5000.0),
                branch: Branch::A,
            };
            let iso2 = IsopreneBranch {
                branch: Branch::B,
                ..iso1
            };
            assert_pair(&iso1.into(), &iso2.into(), iso1.parent_k(&env), &env);
        }
    }

    #[test]
    fn test_glyc_and_hac_pairs_sum_to_parent() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..25 {
            let env = random_env(&mut rng);
            let glyc_a = GlycOh {
                a0: 10f64.powf(rng.gen_range(-12.0..-10.0)),
                branch: Branch::A,
            };
            let glyc_b = GlycOh {
                branch: Branch::B,
                ..glyc_a
            };
            assert_pair(
                &glyc_a.into(),
                &glyc_b.into(),
                glyc_a.parent_k(&env),
                &env,
            );
            let hac_a = HacOh {
                a0: 2.15e-12,
                c0: rng.gen_range(0.0..400.0),
                branch: Branch::A,
            };
            let hac_b = HacOh {
                branch: Branch::B,
                ..hac_a
            };
            assert_pair(&hac_a.into(), &hac_b.into(), hac_a.parent_k(&env), &env);
        }
    }

    #[test]
    fn test_temperature_branch_variants_agree_when_b1_is_zero() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let env = random_env(&mut rng);
            let (a0, c0, a1, c1) = (
                10f64.powf(rng.gen_range(-13.0..-11.0)),
                rng.gen_range(-500.0..500.0),
                rng.gen_range(0.0..100.0),
                rng.gen_range(-2000.0..0.0),
            );
            let one = TemperatureBranch::acac(a0, c0, a1, c1);
            let two = TemperatureBranch::acabc(a0, c0, a1, 0.0, c1);
            assert_eq!(one.k(&env), two.k(&env));
        }
    }

    #[test]
    fn test_equilibrium_pairs_in_mechanism_recover_k_eq() {
        let table = fullchem_table();
        let env = EnvironmentContext::new(270.0, 1.5e19);
        let mut n = 0;
        for r in &table.reactions {
            if let RateLaw::JplEquilibrium(eq) = &r.rate {
                let k_b = eq.k(&env);
                assert_relative_eq!(
                    eq.forward.k(&env) / k_b,
                    eq.k_eq.k_at(270.0),
                    max_relative = 1e-12
                );
                n += 1;
            }
        }
        assert!(n >= 3);
    }

    #[test]
    fn test_ohco_increases_with_pressure() {
        let law = OhCo { a0: 1.5e-13 };
        let low = law.k(&EnvironmentContext::new(298.0, 1.0e17));
        let high = law.k(&EnvironmentContext::new(298.0, 2.5e19));
        assert!(high > low);
        // surface value close to the recommended 2.4e-13
        assert!(high > 1.5e-13 && high < 3.5e-13);
    }

    #[test]
    fn test_dms_and_glyx_closed_forms() {
        let env = EnvironmentContext::new(280.0, 2.0e19);
        let dms = DmsOh {
            a0: 8.2e-39,
            c0: 5376.0,
            a1: 1.05e-5,
            c1: 3644.0,
        };
        let k0 = 8.2e-39 * (5376.0_f64 / 280.0).exp();
        let k1 = 1.05e-5 * (3644.0_f64 / 280.0).exp();
        assert_relative_eq!(
            dms.k(&env),
            k0 * 2.0e19 * 0.2095 / (1.0 + k1 * 0.2095),
            max_relative = 1e-12
        );
        let glyx = GlyxNo3 {
            a0: 1.4e-12,
            c0: -1860.0,
        };
        let o2 = 2.0e19 * 0.2095;
        assert_relative_eq!(
            glyx.k(&env),
            1.4e-12 * (-1860.0_f64 / 280.0).exp() * (o2 + 3.5e18) / (2.0 * o2 + 3.5e18),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rate_law_json_round_trip() {
        let laws: Vec<RateLaw> = vec![
            Arrhenius::ac(3.0e-12, -1500.0).into(),
            JplFalloff::abab(1.8e-30, 3.0, 2.8e-11, 0.0, 0.6).into(),
            Photolysis {
                index: 4,
                factor: 1.0,
            }
            .into(),
        ];
        let text = serde_json::to_string(&laws).unwrap();
        assert!(text.contains("\"law\":\"Arrhenius\""));
        let back: Vec<RateLaw> = serde_json::from_str(&text).unwrap();
        let env = EnvironmentContext::new(250.0, 1.0e19).with_j_values(vec![2.0e-4; 5]);
        assert_eq!(back.len(), laws.len());
        for (b, l) in back.iter().zip(&laws) {
            assert_eq!(b.family(), l.family());
            assert_relative_eq!(b.k(&env), l.k(&env), max_relative = 1e-14);
        }
        let parsed: RateLaw =
            serde_json::from_str(r#"{"law": "Arrhenius", "a": 1.0e-11}"#).unwrap();
        assert_relative_eq!(parsed.k(&env), 1.0e-11, max_relative = 1e-14);
    }
}
