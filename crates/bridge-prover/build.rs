fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Only build SP1 programs if the sp1 feature is enabled
    #[cfg(feature = "sp1")]
    {
        use sp1_build::build_program_with_args;

        build_program_with_args("../sp1/transition/program", Default::default());
        build_program_with_args("../sp1/leaf-attestor/program", Default::default());
    }

    Ok(())
}
