use clap::Parser;
use wasm_bindgen::prelude::*;

mod app;
mod source;
mod utils;
mod view;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: app::GameProps,
}

impl Args {
    /// Parses the page's location hash, e.g. `#--seed=42&-vv`, as if it were a command line.
    fn from_fragment(fragment: &str) -> Result<Self, clap::Error> {
        let args = fragment.split(['#', '&']).filter(|arg| !arg.is_empty());
        Self::try_parse_from(std::iter::once("trivito").chain(args))
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let (args, parse_error) = match Args::from_fragment(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from(["trivito"]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = parse_error {
        log::error!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<app::GameView>::with_root_and_props(root, args.game).render();
}
