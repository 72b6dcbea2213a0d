use clap::{Args, Parser, Subcommand};

use prng_period::configs::{
    DEFAULT_STEPS, DEMO_LCG_A, DEMO_LCG_B, DEMO_LCG_M, DEMO_LCG_SEED, DEMO_LFSR_REGISTER,
    DEMO_LFSR_TAPS, DEMO_MODULUS,
};
use prng_period::{
    construct_generator, run, Combine, Feedback, GeneratorConfig, LcgParams, Prng, PrngError,
    RunResult, Source,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Linear congruential generator, x' = (a * x + b) mod 2^m
    Lcg {
        #[arg(long, default_value_t = DEMO_LCG_A)]
        a: u128,

        #[arg(long, default_value_t = DEMO_LCG_B)]
        b: u128,

        /// Modulus exponent, 1..=128
        #[arg(long, default_value_t = DEMO_LCG_M)]
        m: u32,

        #[arg(long, default_value_t = DEMO_LCG_SEED)]
        seed: u128,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Linear feedback shift register
    Lfsr {
        /// Initial register as a bit string, oldest bit first (e.g. 10110010)
        #[arg(long, value_parser = parse_register, default_value = "10110010")]
        register: Bits,

        /// Tapped register indices
        #[arg(long, value_delimiter = ',', default_values_t = DEMO_LFSR_TAPS)]
        taps: Vec<usize>,

        /// Combine taps with XNOR instead of XOR
        #[arg(long, default_value_t = false)]
        xnor: bool,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Run both demonstration generators, raw and mod 2
    Demo {
        /// Print the (index, value) series of every run
        #[arg(short, long, default_value_t = false)]
        points: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Number of values to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Stop at the first repeated value
    #[arg(short, long, default_value_t = false)]
    stop_on_repeat: bool,

    /// Reduce every emitted value modulo this number
    #[arg(long)]
    modulus: Option<u128>,

    /// Print the (index, value) series
    #[arg(short, long, default_value_t = false)]
    points: bool,
}

/// Register bits as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Bits(Vec<u8>);

fn parse_register(s: &str) -> Result<Bits, String> {
    s.chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            _ => Err(format!("invalid register bit '{c}', expected 0 or 1")),
        })
        .collect::<Result<Vec<u8>, String>>()
        .map(Bits)
}

fn report(prng: &Prng, result: &RunResult, modulus: Option<u128>, points: bool) {
    let label = match prng {
        Prng::Lcg(_) => "linear",
        Prng::Lfsr(_) => "register",
    };
    let label = match modulus {
        Some(m) => format!("{}_{}_mod{}", label, result.len(), m),
        None => format!("{}_{}", label, result.len()),
    };
    println!("[+] {}: period = {}.", prng.kind(), result.preperiod);
    println!("    {}: {} number(s) generated.", label, result.len());
    if let Some(cycle) = result.cycle {
        println!(
            "    cycle of length {} entered at index {}.",
            cycle.length, cycle.start
        );
    }
    println!();
    if points {
        for (index, value) in result.points() {
            println!("{},{}", index, value);
        }
        println!();
    }
}

fn execute(config: GeneratorConfig, args: &RunArgs) -> Result<(), PrngError> {
    let mut prng = construct_generator(config)?;
    let result = run(&mut prng, args.steps, args.stop_on_repeat, args.modulus)?;
    report(&prng, &result, args.modulus, args.points);
    Ok(())
}

fn demo(points: bool) -> Result<(), PrngError> {
    println!("[+] PRNG demonstration\n");
    let configs = [
        GeneratorConfig::Lcg {
            params: LcgParams::new(DEMO_LCG_A, DEMO_LCG_B, DEMO_LCG_M),
            seed: DEMO_LCG_SEED,
        },
        GeneratorConfig::Lfsr {
            register: DEMO_LFSR_REGISTER.to_vec(),
            feedback: Feedback::xor(DEMO_LFSR_TAPS.to_vec()),
        },
    ];
    for config in configs {
        let mut prng = construct_generator(config)?;
        for modulus in [None, Some(DEMO_MODULUS)] {
            prng.reset();
            let result = run(&mut prng, DEFAULT_STEPS, false, modulus)?;
            report(&prng, &result, modulus, points);
        }
    }
    Ok(())
}

fn main() -> Result<(), PrngError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Lcg { a, b, m, seed, run } => execute(
            GeneratorConfig::Lcg {
                params: LcgParams::new(a, b, m),
                seed,
            },
            &run,
        ),
        Command::Lfsr {
            register,
            taps,
            xnor,
            run,
        } => {
            let combine = if xnor { Combine::Xnor } else { Combine::Xor };
            execute(
                GeneratorConfig::Lfsr {
                    register: register.0,
                    feedback: Feedback::new(taps, combine),
                },
                &run,
            )
        }
        Command::Demo { points } => demo(points),
    }
}
