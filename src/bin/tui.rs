use anyhow::Result;

fn main() -> Result<()> {
    stagkitchen::tui::run()
}
