use pointer_activation::replay::{load_script, run};
use pointer_activation::settings::SessionSettings;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let script_path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: gesture_replay <script.json> [settings.json]"))?;
    let settings_path = args.next().unwrap_or_else(|| "settings.json".into());

    let settings = SessionSettings::load(&settings_path)?;
    pointer_activation::logging::init(settings.debug_logging, None);

    let script = load_script(&script_path)?;
    tracing::info!(
        mouse = ?settings.mouse_activation,
        touch = ?settings.touch_activation,
        steps = script.steps.len(),
        "replaying {}",
        script_path
    );

    for record in run(settings, &script) {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}
