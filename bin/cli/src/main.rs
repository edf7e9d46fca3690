use anyhow::{bail, Context};
use mergepath::partition_checked;

const USAGE: &str = "usage: mergepath <p> <A> <B>
  p     number of partitions, at least 1
  A, B  strictly increasing comma separated integers, may be empty";

fn parse_seq(name: &str, raw: &str) -> anyhow::Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>()
                .with_context(|| format!("invalid value {:?} in sequence {}", s, name))
        })
        .collect()
}

/// Partitions the sequences described by `args` and renders one line per
/// block.
fn run(args: &[String]) -> anyhow::Result<Vec<String>> {
    let [p, a, b] = args else {
        bail!("expected 3 arguments, got {}\n{}", args.len(), USAGE);
    };

    let p: usize = p
        .parse()
        .with_context(|| format!("invalid partition count {:?}", p))?;
    let a = parse_seq("A", a)?;
    let b = parse_seq("B", b)?;
    log::info!("read {} + {} values, {} partitions", a.len(), b.len(), p);

    let lines = partition_checked(&a, &b, p)?
        .map(|part| format!("{}: {:?} {:?}", part.index, part.a, part.b))
        .collect();
    Ok(lines)
}

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .env()
        .init()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    for line in run(&args)? {
        println!("{}", line);
    }
    Ok(())
}
