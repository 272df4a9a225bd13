use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use lineshell::builder::ShellBuilder;
use lineshell::sync_io::IO;
use lineshell::{Output, ShellError};
use termion::raw::IntoRawMode;

fn echo(out: &dyn Output, argv: &[&str]) -> Result<(), ShellError> {
    out.println(&argv[1..].join(" "))
}

fn add(out: &dyn Output, argv: &[&str]) -> Result<(), ShellError> {
    let mut sum: i64 = 0;

    for arg in &argv[1..] {
        match arg.parse::<i64>() {
            Ok(n) => sum = sum.saturating_add(n),
            Err(_) => return out.println(&format!("E: Not a number: {}", arg)),
        }
    }

    out.println(&sum.to_string())
}

fn main() {
    let raw_term = std::io::stdout().into_raw_mode().unwrap();
    let done = AtomicBool::new(false);

    let quit = |out: &dyn Output, _: &[&str]| -> Result<(), ShellError> {
        out.println("bye")?;
        let _ = raw_term.suspend_raw_mode();
        process::exit(0)
    };

    let shell = ShellBuilder::new()
        .with_newline("\r\n")
        .with_banner("lineshell demo: echo, add, quit\r\n")
        .with_registration_announcements(true)
        .build(IO::default());

    shell.register_command("echo", &echo).unwrap();
    shell.register_command("add", &add).unwrap();
    shell.register_command("quit", &quit).unwrap();

    thread::scope(|s| {
        s.spawn(|| {
            if let Err(err) = shell.run_blocking() {
                let _ = shell.println(&format!("E: {}", err));
            }

            done.store(true, Ordering::Relaxed);
        });

        s.spawn(|| {
            let mut tick = 0;

            while !done.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_secs(5));
                tick += 1;

                if shell.println(&format!("tick {}", tick)).is_err() {
                    break;
                }
            }
        });
    });
}
