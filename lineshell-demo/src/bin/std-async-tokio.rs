use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lineshell::builder::ShellBuilder;
use lineshell::sync_io::IO;
use lineshell::{Output, ShellError};
use termion::raw::IntoRawMode;

static QUIT: AtomicBool = AtomicBool::new(false);

fn echo(out: &dyn Output, argv: &[&str]) -> Result<(), ShellError> {
    out.println(&argv[1..].join(" "))
}

fn quit(out: &dyn Output, _: &[&str]) -> Result<(), ShellError> {
    QUIT.store(true, Ordering::Relaxed);
    out.println("bye")
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let raw_term = std::io::stdout().into_raw_mode().unwrap();

    let shell = Arc::new(
        ShellBuilder::new()
            .with_newline("\r\n")
            .with_banner("lineshell demo: echo, quit\r\n")
            .build(IO::default()),
    );

    shell.register_command("echo", &echo).unwrap();
    shell.register_command("quit", &quit).unwrap();

    let consumer = {
        let shell = shell.clone();
        tokio::task::spawn_blocking(move || shell.run_blocking())
    };

    let mut interval = tokio::time::interval(Duration::from_millis(100));
    let mut ticks = 0u32;

    while !QUIT.load(Ordering::Relaxed) && !consumer.is_finished() {
        interval.tick().await;
        ticks += 1;

        if ticks % 50 == 0 {
            shell
                .println(&format!("uptime {}s", ticks / 10))
                .unwrap();
        }
    }

    drop(raw_term);

    // The consumer is parked in a blocking stdin read; leave without
    // waiting for it.
    std::process::exit(0);
}
