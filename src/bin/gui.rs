use clap::Parser;
use stackpad::cli::Args;
use stackpad::gui::{theme, GuiApp};

fn main() -> stackpad::Result<()> {
    let args = Args::parse();
    let config = args.setup()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Stackpad"),
        ..Default::default()
    };

    eframe::run_native(
        "Stackpad",
        options,
        Box::new(move |cc| {
            theme::setup_theme(&cc.egui_ctx);
            Ok(Box::new(GuiApp::new(cc, &args.text, config)))
        }),
    )
    .map_err(|err| stackpad::Error::Gui(err.to_string()))
}
