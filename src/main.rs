use AtmoChem::Examples::mechanism_examples::mechanism_examples;
use AtmoChem::Utils::logger::init_logger;
use AtmoChem::settings::ChemConfig;
use log::error;

pub fn main() {
    let config = match ChemConfig::load_config("atmochem_config.json") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            ChemConfig::default()
        }
    };
    if let Err(e) = init_logger(config.level(), config.log_file.as_deref()) {
        eprintln!("{}", e);
    }
    let task: usize = 2;
    match config
        .reaction_table()
        .and_then(|table| config.build_mechanism(&table))
    {
        Ok(mechanism) => {
            log::info!("{} reactions compiled", mechanism.n_reactions());
            mechanism_examples(task);
        }
        Err(e) => error!("{}", e),
    }
}
