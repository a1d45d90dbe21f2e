/// eng
/// Reading and writing mechanism tables (species list + reactions with their rate laws) as JSON,
/// either as a bare document or as a section under a "MECHANISM" header of a larger text file.
/// Parse errors are logged with the line and column of the file.
/// ----------------------------------------------------------------
/// ru
/// Чтение и запись таблиц механизма (список веществ + реакции с законами скорости) в JSON,
/// как отдельный документ или как раздел под заголовком "MECHANISM" в текстовом файле.
/// Ошибки разбора выводятся в лог со строкой и столбцом файла.
pub mod load_from_file;
/// terminal and file logging through simplelog
pub mod logger;
