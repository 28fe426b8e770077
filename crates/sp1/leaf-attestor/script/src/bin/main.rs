//! An end-to-end example of using the SP1 SDK to execute or prove the leaf
//! attestor program over a synthetic leaf set.
//!
//! You can run this script using the following command from the root of this
//! repository:
//! ```shell
//! RUST_LOG=info cargo run -p leaf-attestor-script --release -- --execute --leaves 50 --index 7
//! ```
use std::error::Error;
use std::time::Instant;

use alloy_primitives::B256;
use bridge_merkle::{depth_and_size, fold_root, hash_leaf, merkle_path, merkle_zeros, BoundedPath};
use bridge_program_types::attestor::AttestorInput;
use clap::Parser;
use sp1_sdk::{include_elf, ProverClient, SP1Stdin};

/// The ELF (executable and linkable format) file for the Succinct RISC-V zkVM.
pub const LEAF_ATTESTOR_ELF: &[u8] = include_elf!("leaf-attestor-program");

/// The arguments for the command.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Run the program in execute mode")]
    execute: bool,

    #[arg(long, help = "Run the program in prove mode")]
    prove: bool,

    #[arg(long, default_value = "50", help = "Number of leaves in the synthetic tree")]
    leaves: usize,

    #[arg(long, default_value = "0", help = "Leaf index to attest")]
    index: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    sp1_sdk::utils::setup_logger();
    dotenvy::dotenv().ok();

    let args = Args::parse();

    if args.execute == args.prove {
        eprintln!("Error: You must specify either --execute or --prove");
        std::process::exit(1);
    }
    assert!(args.index < args.leaves, "index must address a leaf");

    let client = ProverClient::from_env();

    let values: Vec<B256> = (0..args.leaves).map(|i| B256::repeat_byte(i as u8)).collect();
    let leaves: Vec<B256> = values.iter().map(hash_leaf).collect();
    let (depth, padded_size) = depth_and_size(leaves.len());
    let zeros = merkle_zeros(depth);

    let input = AttestorInput {
        root_hash: fold_root(&leaves, padded_size, depth, &zeros),
        path: BoundedPath::from_siblings(&merkle_path(&leaves, padded_size, depth, args.index, &zeros)),
        index: args.index as u64,
        value: values[args.index],
    };

    let mut stdin = SP1Stdin::new();
    stdin.write(&input);

    if args.execute {
        let (output, report) = client.execute(LEAF_ATTESTOR_ELF, &stdin).run()?;
        println!("Program executed successfully.");

        let committed_root: B256 = bincode::deserialize(output.as_slice())?;
        println!("committed root: {committed_root}");
        println!("Total instruction count: {}", report.total_instruction_count());
    } else {
        let (pk, vk) = client.setup(LEAF_ATTESTOR_ELF);
        let start_time = Instant::now();

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
