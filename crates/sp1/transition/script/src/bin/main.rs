//! An end-to-end example of using the SP1 SDK to execute or prove the bridge
//! transition program against a serialized input.
//!
//! You can run this script using the following command from the root of this
//! repository:
//! ```shell
//! RUST_LOG=info cargo run -p bridge-transition-script --release -- --execute --input testdata/inputs/transition.json
//! ```
//! or
//! ```shell
//! RUST_LOG=info cargo run -p bridge-transition-script --release -- --prove --input testdata/inputs/transition.json
//! ```
use std::error::Error;
use std::fs;
use std::time::Instant;

use bridge_program_types::transition::{TransitionInput, TransitionOutput};
use clap::Parser;
use sp1_sdk::{include_elf, ProverClient, SP1Stdin};

/// The ELF (executable and linkable format) file for the Succinct RISC-V zkVM.
pub const BRIDGE_TRANSITION_ELF: &[u8] = include_elf!("bridge-transition-program");

/// The arguments for the command.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Run the program in execute mode")]
    execute: bool,

    #[arg(long, help = "Run the program in prove mode")]
    prove: bool,

    #[arg(long, help = "Path to a JSON-serialized transition input")]
    input: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    sp1_sdk::utils::setup_logger();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if args.execute == args.prove {
        eprintln!("Error: You must specify either --execute or --prove");
        std::process::exit(1);
    }

    let client = ProverClient::from_env();

    let input: TransitionInput = serde_json::from_str(&fs::read_to_string(&args.input)?)?;

    let mut stdin = SP1Stdin::new();
    stdin.write(&input);

    if args.execute {
        // Execute the program.
        let (output, report) = client.execute(BRIDGE_TRANSITION_ELF, &stdin).run()?;
        println!("Program executed successfully.");

        // Read the output.
        let transition_output: TransitionOutput = bincode::deserialize(output.as_slice())?;
        println!("store hash high byte: {}", transition_output.store_hash.high_byte);
        println!("store hash lower bytes: {}", transition_output.store_hash.lower_bytes);

        // Record the total gas and number of cycles executed.
        println!("Total gas: {}", report.gas.unwrap());
        println!("Total instruction count: {}", report.total_instruction_count());
        println!("Total syscall count: {}", report.total_syscall_count());
    } else {
        // Setup the program for proving.
        let (pk, vk) = client.setup(BRIDGE_TRANSITION_ELF);
        let start_time = Instant::now();

        // Generate the proof.
        let proof = client
            .prove(&pk, &stdin)
            .groth16()
            .run()
            .expect("failed to generate proof");
        println!("Proof generation time: {:?}", Instant::now() - start_time);

        client.verify(&proof, &vk).expect("failed to verify proof");
        println!("Successfully generated and verified proof!");
    }

    Ok(())
}
