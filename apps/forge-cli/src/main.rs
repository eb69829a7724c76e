// [apps/forge-cli/src/main.rs]
/*!
 * =================================================================
 * APARATO: FORGE SHELL (V4.2 - ZENITH SHELL)
 * CLASIFICACIÓN: APPLICATION LAYER (ENTRY POINT)
 * RESPONSABILIDAD: BOOTSTRAP DE ENTORNO E IGNICIÓN DEL MOTOR
 *
 * VISION HIPER-HOLÍSTICA 2026:
 * 1. ARCHITECTURAL PURITY: El shell solo parsea directivas, recolecta
 *    patrones y delega la totalidad de la búsqueda al motor de
 *    ignición, actuando como un Switchboard puro.
 * 2. PROTOCOL EXIT CODES: 0 al agotar los patrones; 1 ante fallos de
 *    argumentos, de fichero o lotes sin patrones buscables.
 * 3. VERSION STRATA: mainnet (0/128) por defecto; testnet impone
 *    (111/239); namecoin reescribe la versión de dirección a 52.
 * =================================================================
 */

mod engine;
mod input;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use tracing::info;

use vforge_domain_patterns::{PrefixContext, RegexContext};

/// Versiones de red mainnet por defecto.
const MAINNET_ADDRESS_VERSION: u8 = 0;
const MAINNET_PRIVATE_VERSION: u8 = 128;

/// Versión de dirección de namecoin.
const NAMECOIN_ADDRESS_VERSION: u8 = 52;

/// Versiones de red de bitcoin testnet.
const TESTNET_ADDRESS_VERSION: u8 = 111;
const TESTNET_PRIVATE_VERSION: u8 = 239;

/**
 * Directivas de mando del motor de búsqueda vanity.
 */
#[derive(Parser, Debug)]
#[command(
    name = "vforge",
    version,
    about = "Vanity Forge // secp256k1 vanity address search engine",
    long_about = "Generates a bitcoin receiving address matching each pattern and \
outputs the address with its associated private key. By default a pattern is \
interpreted as an exact Base58 prefix."
)]
struct ForgeDirectives {
    /// Verbose output
    #[arg(short = 'v')]
    verbose: bool,

    /// Use regular expression match instead of prefix
    #[arg(short = 'r')]
    regex_mode: bool,

    /// Case-insensitive prefix search
    #[arg(short = 'i')]
    case_insensitive: bool,

    /// Generate namecoin address
    #[arg(short = 'N')]
    namecoin: bool,

    /// Generate bitcoin testnet address
    #[arg(short = 'T')]
    testnet: bool,

    /// Set number of worker threads (default: number of CPUs)
    #[arg(short = 't', value_name = "THREADS")]
    thread_count: Option<usize>,

    /// File containing list of patterns, one per line ("-" for stdin)
    #[arg(short = 'f', value_name = "FILE")]
    pattern_file: Option<String>,

    /// Additional patterns
    #[arg(value_name = "PATTERN")]
    patterns: Vec<String>,
}

/**
 * Punto de ignición del binario.
 *
 * # Errors:
 * - `IO_FAULT`: el fichero de patrones no se puede abrir o leer.
 * - Directivas inválidas (conteo de hilos cero, lote vacío).
 */
fn main() -> Result<()> {
    // 1. INICIALIZACIÓN DEL SISTEMA DE OBSERVABILIDAD
    vforge_shared_heimdall::init_tracing("vforge");

    // 2. PARSEO DE DIRECTIVAS ESTRATÉGICAS
    let directives = ForgeDirectives::parse();

    if let Some(0) = directives.thread_count {
        bail!("Invalid thread count '0'");
    }
    if directives.case_insensitive && directives.regex_mode {
        println!("WARNING: case insensitive mode incompatible with regular expressions");
    }

    // 3. RECOLECCIÓN DEL LOTE DE PATRONES (fichero/stdin + posicionales)
    let mut patterns = match &directives.pattern_file {
        Some(path) => input::read_pattern_file(path)
            .with_context(|| format!("Could not open {path}"))?,
        None => Vec::new(),
    };
    patterns.extend(directives.patterns.iter().cloned());

    if patterns.is_empty() {
        ForgeDirectives::command()
            .print_help()
            .context("IO_FAULT: unable to render usage")?;
        std::process::exit(1);
    }

    // 4. ESTRATO DE VERSIONES DE RED
    let mut address_version = MAINNET_ADDRESS_VERSION;
    let mut private_version = MAINNET_PRIVATE_VERSION;
    if directives.testnet {
        address_version = TESTNET_ADDRESS_VERSION;
        private_version = TESTNET_PRIVATE_VERSION;
    }
    if directives.namecoin {
        address_version = NAMECOIN_ADDRESS_VERSION;
    }

    // 5. DESPLIEGUE DEL ENJAMBRE
    let worker_count = directives.thread_count.unwrap_or_else(num_cpus::get).max(1);
    if directives.verbose {
        println!("Using {worker_count} worker thread(s)");
    }

    info!(
        workers = worker_count,
        regex = directives.regex_mode,
        address_version,
        "🚀 [SHELL]: Handing control to the search engine."
    );

    if directives.regex_mode {
        let context = RegexContext::new(address_version, private_version);
        if !context.add_patterns(&patterns) {
            std::process::exit(1);
        }
        let remaining = context.remaining();
        if remaining > 1 {
            println!("Regular expressions: {remaining}");
        }
        engine::ignite_regex_search(&context, worker_count, directives.verbose);
    } else {
        let context = PrefixContext::new(address_version, private_version, directives.verbose);
        if !context.add_patterns(&patterns, directives.case_insensitive) {
            std::process::exit(1);
        }
        engine::ignite_prefix_search(&context, worker_count, directives.verbose);
    }

    // 6. CIERRE DETERMINISTA: el retiro del último patrón agotó el enjambre.
    info!("🏁 [SHELL]: Pattern set drained. Shutdown sequence concluded.");
    Ok(())
}
