use clap::Parser;
use stackpad::cli::Args;
use stackpad::ui::{init, render, restore, App, Tui};

fn main() -> stackpad::Result<()> {
    let args = Args::parse();
    let config = args.setup()?;

    // Initialize terminal
    let mut terminal = init()?;

    // Create app
    let mut app = App::with_config(&args.text, config);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    restore()?;
    tracing::info!("terminal restored");

    result
}

fn run_app(terminal: &mut Tui, app: &mut App) -> stackpad::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        app.handle_input()?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
