//! Render every embedded grammar for every target twice and report whether the
//! output is byte-identical. `--json` prints the parsed grammars as well.
use generate_ast::{render_grammar, CodegenSettings, Target, GRAMMARS};

fn main() -> anyhow::Result<()> {
    let show_json = std::env::args().any(|a| a == "--json");
    let mut unstable = 0;

    for target in [Target::Rust, Target::Java, Target::Json] {
        let settings = CodegenSettings { target, ..CodegenSettings::default() };
        for source in GRAMMARS {
            let (file_name, first) = render_grammar(source, &settings)?;
            let (_, second) = render_grammar(source, &settings)?;
            let status = if first == second { "stable" } else { unstable += 1; "UNSTABLE" };
            println!("{:<5} {:<12} {:>6} bytes  {status}", target.label(), file_name, first.len());
        }
    }

    if show_json {
        for source in GRAMMARS {
            let spec = source.parse()?;
            println!("{}", serde_json::to_string_pretty(&spec)?);
        }
    }

    anyhow::ensure!(unstable == 0, "{unstable} artifact(s) rendered differently across runs");
    Ok(())
}
