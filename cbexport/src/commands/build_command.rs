use cbexport_codegen::{Host, build_command};
use clap::Args;
use eyre::Result;

#[derive(Args)]
pub struct BuildCommandCommand {
    /// IDE program to run
    #[arg(long)]
    pub ide: String,

    /// Project name; the project file is `<project>.cbp`
    #[arg(long)]
    pub project: String,

    /// Target to build, or `clean`
    #[arg(long)]
    pub target: Option<String>,

    /// Host the IDE runs on (windows, unix); defaults to this machine
    #[arg(long)]
    pub host: Option<Host>,

    /// Extra arguments passed to the IDE before the project file
    #[arg(last = true)]
    pub extra: Vec<String>,
}

impl BuildCommandCommand {
    pub fn run(&self) -> Result<()> {
        let args = build_command(
            &self.ide,
            &self.project,
            self.target.as_deref(),
            &self.extra,
            self.host.unwrap_or_else(Host::current),
        )?;
        println!("{}", args.join(" "));
        Ok(())
    }
}
