use std::{error::Error, fs::OpenOptions, io::Write, path::Path};

pub(crate) const INVOCATIONS_FILE: &str = "invocations";
pub(crate) const EXIT_STATUS_FILE: &str = "exit-status";
pub(crate) const FAILING_ARG_FILE: &str = "failing-arg";

fn append_invocation(workdir: &Path, args: &[String]) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(workdir.join(INVOCATIONS_FILE))?;
    file.write_all(args.join("\t").as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

fn get_exit_status(workdir: &Path, args: &[String]) -> Result<i32, Box<dyn Error>> {
    if let Ok(failing_arg) = std::fs::read_to_string(workdir.join(FAILING_ARG_FILE)) {
        if args.iter().any(|arg| arg.ends_with(failing_arg.trim())) {
            return Ok(1);
        }
    }
    let exit_status = std::fs::read_to_string(workdir.join(EXIT_STATUS_FILE))?
        .trim()
        .parse()?;
    Ok(exit_status)
}

fn write_output(args: &[String]) -> std::io::Result<()> {
    match args.last() {
        Some(output) if !output.starts_with('-') => {
            std::fs::write(output, format!("converted by fake-convert: {}\n", args.join(" ")))
        }
        _ => Ok(()),
    }
}

/// Stands in for ImageMagick's `convert`: records its arguments next to its
/// own executable and writes a placeholder to the last argument.
pub fn fake_convert_main() {
    let workdir = std::env::current_exe()
        .unwrap()
        .parent()
        .unwrap()
        .to_owned();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let _ = append_invocation(&workdir, &args);

    let exit_status = get_exit_status(&workdir, &args).unwrap_or(0);
    if exit_status == 0 {
        let _ = write_output(&args);
    }
    std::process::exit(exit_status);
}
