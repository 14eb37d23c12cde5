use std::fs::OpenOptions;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use clap::ArgMatches;

use crate::cli_context::CliContext;
use crate::constants::{SAMPLE_CONFIG, SAMPLE_CONFIG_NAME};
use crate::error::{JiraError, JiraResult};
use crate::logging::log_info;

pub async fn handle_example_config(
    context: &mut CliContext,
    matches: &ArgMatches,
) -> JiraResult<()> {
    let install = matches.get_flag("install");
    let target = context.config_path();

    write_copy_plan(&mut io::stdout().lock(), target, install)?;

    if install {
        install_example_config(target)
    } else {
        Ok(())
    }
}

/// Announce the copy; a dry run also shows the sample config itself.
pub fn write_copy_plan<W: Write>(out: &mut W, target: &Path, install: bool) -> io::Result<()> {
    let prefix = if install { "Copying" } else { "Would copy" };
    writeln!(out, "{} {} to {}", prefix, SAMPLE_CONFIG_NAME, target.display())?;

    if !install {
        write!(out, "{}", SAMPLE_CONFIG)?;
    }
    out.flush()
}

/// Write the sample config to `target`, never replacing an existing file.
pub fn install_example_config(target: &Path) -> JiraResult<()> {
    let already_installed = || {
        JiraError::CommandFailed(format!(
            "Not installing, config file already in place: {}",
            target.display()
        ))
    };

    if target.exists() {
        return Err(already_installed());
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(target) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Err(already_installed()),
        Err(e) => return Err(e.into()),
    };
    file.write_all(SAMPLE_CONFIG.as_bytes())?;

    log_info(&format!("Installed example config at {}", target.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_prints_plan_then_sample() {
        let mut out = Vec::new();
        write_copy_plan(&mut out, Path::new("/home/alice/jira.config"), false).unwrap();

        let text = String::from_utf8(out).unwrap();
        let expected_first =
            format!("Would copy {} to /home/alice/jira.config\n", SAMPLE_CONFIG_NAME);
        assert!(text.starts_with(&expected_first));
        assert_eq!(&text[expected_first.len()..], SAMPLE_CONFIG);
    }

    #[test]
    fn install_prints_plan_only() {
        let mut out = Vec::new();
        write_copy_plan(&mut out, Path::new("/home/alice/jira.config"), true).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Copying {} to /home/alice/jira.config\n", SAMPLE_CONFIG_NAME)
        );
    }
}
