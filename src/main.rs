// heapviz: animated terminal viewer for heap allocator snapshots

fn main() -> Result<(), Box<dyn std::error::Error>> {
    heapviz::cli::run_from_env()?;
    Ok(())
}
