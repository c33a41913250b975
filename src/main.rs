use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use pipedb::catalog::{self, IdCounter, xml};

struct Args {
    inputs: Vec<PathBuf>,
    db: Option<PathBuf>,
    out: Option<PathBuf>,
    manufacturer: String,
}

fn parse_args() -> Result<Args> {
    let mut inputs = Vec::new();
    let mut db = None;
    let mut out = None;
    let mut manufacturer = String::new();

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--db" => db = Some(PathBuf::from(argv.next().context("--db needs a path")?)),
            "--out" => out = Some(PathBuf::from(argv.next().context("--out needs a path")?)),
            "--manufacturer" => {
                manufacturer = argv.next().context("--manufacturer needs a name")?;
            }
            "--help" | "-h" => {
                println!(
                    "usage: pipedb <sheet.csv>... [--db <pipes.xml>] [--out <merged.xml>] [--manufacturer <name>]"
                );
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown flag: {flag}"),
            path => inputs.push(PathBuf::from(path)),
        }
    }

    if inputs.is_empty() {
        bail!("no input sheets given; see --help");
    }
    Ok(Args {
        inputs,
        db,
        out,
        manufacturer,
    })
}

fn main() -> Result<()> {
    env_logger::init();
    let args = parse_args()?;

    let mut ids = match &args.db {
        Some(db) => IdCounter::seeded_from_file(db)
            .with_context(|| format!("failed to seed IDs from {}", db.display()))?,
        None => IdCounter::starting_after(xml::DEFAULT_FIRST_ID),
    };

    let mut summary = Vec::new();
    let mut all_chunks = String::new();

    for input in &args.inputs {
        let rows = catalog::read_rows(input)
            .with_context(|| format!("failed to read {}", input.display()))?;
        let entries = catalog::build_entries(&rows, &mut ids, &args.manufacturer);

        let output = input.with_extension("xml");
        xml::write_document(&output, &entries)
            .with_context(|| format!("failed to write {}", output.display()))?;
        summary.push(format!("{}: {} entries", output.display(), entries.len()));

        for entry in &entries {
            all_chunks.push_str(&xml::render_entry(entry));
        }
    }

    if let Some(db) = &args.db {
        let out = args.out.clone().unwrap_or_else(|| db.with_file_name("db_pipes_updated.xml"));
        let total = xml::merge_database(db, &out, &all_chunks)
            .with_context(|| format!("failed to merge into {}", db.display()))?;
        summary.push(format!("{}: {} entries", out.display(), total));
    }

    println!("--- Processing Summary ---");
    for line in &summary {
        println!("{line}");
    }
    Ok(())
}
