/// eng
/// Worked scenarios: stoichiometric matrix, rate coefficients over a temperature profile, one
/// right-hand-side evaluation of the built-in mechanism, many grid cells in parallel and a JSON
/// round trip of the mechanism table.
/// ru
/// Примеры: стехиометрическая матрица, константы скоростей в профиле температуры, вычисление
/// правой части встроенного механизма, параллельный расчёт многих ячеек и JSON-файл механизма.
pub mod mechanism_examples;
