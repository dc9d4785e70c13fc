//! Black-box tests for the `download-wheels` binary.
//!
//! Each test gets its own repository root (via `WHEELPREP_ROOT`) and a
//! separate working directory, plus a fake interpreter that records argv.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Mutex, PoisonError};

use tempfile::TempDir;

/// Serializes script creation and spawning (avoids ETXTBSY on exec).
static SPAWN_LOCK: Mutex<()> = Mutex::new(());

const WHEEL_NAME: &str = "fake_pkg-0.0.1-py3-none-any.whl";

struct Sandbox {
    root: TempDir,
    cwd: TempDir,
    bin: TempDir,
}

impl Sandbox {
    fn new(exit_code: i32) -> Self {
        let sandbox = Self {
            root: tempfile::tempdir().unwrap(),
            cwd: tempfile::tempdir().unwrap(),
            bin: tempfile::tempdir().unwrap(),
        };
        write_fake_python(&sandbox.python(), exit_code);
        sandbox
    }

    /// Sandbox whose interpreter terminates itself with SIGTERM.
    fn self_terminating() -> Self {
        let sandbox = Self::new(0);
        let _lock = SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        fs::write(sandbox.python(), "#!/bin/sh\nkill -TERM $$\nsleep 5\nexit 0\n").unwrap();
        sandbox
    }

    fn python(&self) -> PathBuf {
        self.bin.path().join("python")
    }

    fn write_requirements(&self) {
        fs::write(self.root.path().join("requirements.txt"), "numpy\n").unwrap();
    }

    fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.bin.path().join("args.txt"))
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_download-wheels"));
        cmd.current_dir(self.cwd.path())
            .env("WHEELPREP_ROOT", self.root.path())
            .env("PYTHON_BIN", self.python())
            .env_remove("PIP_ARGS")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, cmd: &mut Command) -> Output {
        let _lock = SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        cmd.output().expect("run download-wheels")
    }
}

fn write_fake_python(path: &Path, exit_code: i32) {
    let _lock = SPAWN_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let script = format!(
        r#"#!/bin/sh
log="$(dirname "$0")/args.txt"
: > "$log"
req=""
out=""
prev=""
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$log"
  if [ "$prev" = "-r" ]; then req="$arg"; fi
  if [ "$prev" = "-d" ]; then out="$arg"; fi
  prev="$arg"
done
if [ ! -f "$req" ]; then
  echo "ERROR: Could not open requirements file: $req" >&2
  exit 1
fi
if [ {exit_code} -ne 0 ]; then
  exit {exit_code}
fi
: > "$out/{WHEEL_NAME}"
exit 0
"#
    );
    fs::write(path, script).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn defaults_resolve_against_repository_root() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();

    let output = sandbox.run(&mut sandbox.command());

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let wheels = sandbox.root.path().join("wheels");
    assert!(wheels.join(WHEEL_NAME).exists());
    assert!(!sandbox.cwd.path().join("wheels").exists());
    assert_eq!(
        stdout(&output).trim_end(),
        format!("Wheels downloaded to {}", wheels.display())
    );
}

#[test]
fn explicit_paths_are_used() {
    let sandbox = Sandbox::new(0);
    let requirements = sandbox.cwd.path().join("blender-reqs.txt");
    fs::write(&requirements, "opencv-python-headless\n").unwrap();
    let out = sandbox.cwd.path().join("build").join("wheels");

    let output = sandbox.run(sandbox.command().arg(&requirements).arg(&out));

    assert!(output.status.success());
    assert!(out.join(WHEEL_NAME).exists());
    let args = sandbox.recorded_args();
    assert_eq!(args[5], requirements.to_string_lossy());
    assert_eq!(args[7], out.to_string_lossy());
}

#[test]
fn missing_requirements_exits_with_tool_code() {
    let sandbox = Sandbox::new(0);

    let output = sandbox.run(&mut sandbox.command());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(!sandbox.root.path().join("wheels").join(WHEEL_NAME).exists());
}

#[test]
fn tool_exit_code_is_propagated() {
    let sandbox = Sandbox::new(42);
    sandbox.write_requirements();

    let output = sandbox.run(&mut sandbox.command());

    assert_eq!(output.status.code(), Some(42));
    assert!(stdout(&output).is_empty());
}

#[test]
fn rerun_against_existing_output_succeeds() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();

    assert!(sandbox.run(&mut sandbox.command()).status.success());
    assert!(sandbox.run(&mut sandbox.command()).status.success());
}

#[test]
fn pip_args_are_forwarded_unvalidated() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();

    let output = sandbox.run(
        sandbox
            .command()
            .env("PIP_ARGS", "--platform win_amd64  --bogus-flag"),
    );

    assert!(output.status.success());
    let args = sandbox.recorded_args();
    assert_eq!(&args[8..], ["--platform", "win_amd64", "--bogus-flag"]);
}

#[test]
fn dotenv_in_working_directory_configures_interpreter() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();
    fs::write(
        sandbox.cwd.path().join(".env"),
        format!("PYTHON_BIN={}\nPIP_ARGS=--no-deps\n", sandbox.python().display()),
    )
    .unwrap();

    let mut cmd = sandbox.command();
    cmd.env_remove("PYTHON_BIN");
    let output = sandbox.run(&mut cmd);

    assert!(output.status.success());
    assert_eq!(sandbox.recorded_args().last().map(String::as_str), Some("--no-deps"));
}

#[test]
fn missing_interpreter_exits_127() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();

    let output = sandbox.run(
        sandbox
            .command()
            .env("PYTHON_BIN", "wheelprep-no-such-python-3.99"),
    );

    assert_eq!(output.status.code(), Some(127));
    assert!(String::from_utf8_lossy(&output.stderr).contains("wheelprep-no-such-python-3.99"));
}

#[test]
fn output_path_occupied_by_file_fails_before_pip() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();
    fs::write(sandbox.root.path().join("wheels"), b"file").unwrap();

    let output = sandbox.run(&mut sandbox.command());

    assert_eq!(output.status.code(), Some(73));
    assert!(!sandbox.bin.path().join("args.txt").exists());
}

#[test]
fn signal_termination_exits_128_plus_signal() {
    let sandbox = Sandbox::self_terminating();
    sandbox.write_requirements();

    let output = sandbox.run(&mut sandbox.command());

    assert_eq!(output.status.code(), Some(143));
    assert!(stdout(&output).is_empty());
}

#[test]
fn empty_positionals_use_root_defaults() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();

    let output = sandbox.run(sandbox.command().args(["", ""]));

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(sandbox.root.path().join("wheels").join(WHEEL_NAME).exists());
}

#[test]
fn verbose_logs_resolved_paths_and_interpreter() {
    let sandbox = Sandbox::new(0);
    sandbox.write_requirements();

    let output = sandbox.run(sandbox.command().arg("-v").env("NO_COLOR", "1"));

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let requirements = sandbox.root.path().join("requirements.txt");
    assert!(stderr.contains(&format!("requirements = {}", requirements.display())));
    assert!(stderr.contains("Resolved interpreter"));
}
