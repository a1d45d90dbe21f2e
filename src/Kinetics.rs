/// eng
/// Error types: construction-time `BuildError`, step-aborting `EvaluationError` and the
/// top-level `ChemError` of loaders and the binary.
/// ru
/// Типы ошибок: `BuildError` при построении механизма, `EvaluationError`, прерывающая шаг
/// интегрирования, и общая `ChemError` для загрузчиков и исполняемого файла.
pub mod errors;
/// eng
/// Physical inputs of one rate evaluation: temperature, air number density, humidity, water
/// vapour, photolysis rates and the heterogeneous chemistry state.
/// ru
/// Физические входные данные одного вычисления скоростей: температура, плотность воздуха,
/// влажность, водяной пар, скорости фотолиза и состояние гетерогенной химии.
pub mod environment;
/// eng
/// Aerosol and cloud state used by heterogeneous rate laws: surface area and radius per aerosol
/// type, aqueous ion composition, cloud geometry, precomputed stratospheric rates.
/// ru
/// Состояние аэрозолей и облаков для гетерогенных законов скорости.
pub mod het_chem_state;
/// eng
/// Gas-phase rate-law families: modified Arrhenius, third-body, JPL and IUPAC/Troe falloff,
/// equilibrium reverse rates, HO2 self-reaction, OH + CO, OH + HNO3 and the branching-ratio
/// correlations of the organic peroxy radical chemistry.
/// ru
/// Законы скорости газофазных реакций: модифицированный Аррениус, реакции с третьим телом,
/// переходные области давления по JPL и Троэ, обратные реакции через константу равновесия,
/// корреляции коэффициентов ветвления.
///
///  # Examples
/// ```
/// use AtmoChem::Kinetics::environment::EnvironmentContext;
/// use AtmoChem::Kinetics::gas_rate_laws::JplFalloff;
/// use AtmoChem::Kinetics::rate_law::RateCoefficient;
/// let env = EnvironmentContext::new(250.0, 5.0e18);
/// let oh_no2 = JplFalloff::aba(1.8e-30, 3.0, 2.8e-11, 0.6);
/// let k = oh_no2.k(&env);
/// assert!(k > 0.0 && k < 2.8e-11);
/// ```
pub mod gas_rate_laws;
/// eng
/// Reactive uptake on aerosols and clouds: first-order uptake rate from gamma, reacto-diffusive
/// correction, halide-dependent gammas for HOBr/HOCl, N2O5 parameterisation with ClNO2 yield,
/// in-cloud entrainment limitation and the bimolecular limited form.
/// ru
/// Реактивный захват на аэрозолях и облаках.
pub mod het_rate_laws;
/// eng
/// The `RateCoefficient` trait and the closed `RateLaw` enum stored in reaction tables.
/// ru
/// Трейт `RateCoefficient` и перечисление `RateLaw`, хранящееся в таблицах реакций.
pub mod rate_law;
/// eng
/// Unit bases of coefficients and of the ODE state (molec cm-3, ppb, SI) and the order-aware
/// conversion between them.
/// ru
/// Единицы коэффициентов и вектора состояния и их пересчёт с учётом порядка реакции.
pub mod units;
/// eng
/// The module parses declarative reaction equations like "2 HO2 = H2O2 + O2" into reactant and
/// product lists and builds the net stoichiometric matrix.
/// ru
/// Модуль разбирает уравнения реакций вида "2 HO2 = H2O2 + O2" в списки реагентов и продуктов
/// и строит стехиометрическую матрицу.
/// ----------------------------------------------------------------
/// # Examples
/// ```
/// use AtmoChem::Kinetics::stoichiometry_analyzer::parse_equation;
/// let eq = parse_equation("R1", "MO2 + NO = 0.75 CH2O + 0.25 MOH + NO2").unwrap();
/// assert_eq!(eq.order(), 2.0);
/// assert_eq!(eq.product_coefficient("CH2O"), 0.75);
/// ```
pub mod stoichiometry_analyzer;
/// eng
/// Declarative mechanism definition: species, reaction specifications and reaction sets.
/// ru
/// Декларативное описание механизма: вещества, реакции и группы реакций.
pub mod reaction_table;
/// eng
/// Compilation of a reaction table into an immutable mechanism, and evaluation of dC/dt and the
/// Jacobian for one grid cell or many in parallel.
/// ru
/// Компиляция таблицы реакций в неизменяемый механизм и вычисление dC/dt и якобиана
/// для одной ячейки сетки или многих параллельно.
///
///  # Examples
/// ```
/// use AtmoChem::Kinetics::environment::EnvironmentContext;
/// use AtmoChem::Kinetics::fullchem::{J_SLOTS, fullchem_table};
/// use AtmoChem::Kinetics::mechanism::{Mechanism, MechanismOptions};
/// use nalgebra::DVector;
/// let mechanism = Mechanism::build(&fullchem_table(), &MechanismOptions::default()).unwrap();
/// let env = EnvironmentContext::default().with_j_values(vec![1.0e-5; J_SLOTS.len()]);
/// let conc = DVector::from_element(mechanism.n_species(), 1.0);
/// let dcdt = mechanism.rhs(0.0, &conc, &env).unwrap();
/// assert_eq!(dcdt.len(), mechanism.n_species());
/// ```
pub mod mechanism;
/// eng
/// Built-in mechanism: inorganic, organic, isoprene and halogen gas chemistry, photolysis and
/// heterogeneous uptake, split into one submodule per family.
/// ru
/// Встроенный механизм: неорганическая, органическая, изопреновая и галогенная химия,
/// фотолиз и гетерогенный захват, по подмодулю на каждое семейство.
pub mod fullchem;

mod mechanism_tests;
mod rate_laws_tests;
