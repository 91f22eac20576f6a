use parlor::menu::*;
use parlor::roulette::Spinner;

fn main() -> anyhow::Result<()> {
    parlor::log();
    let rng = rand::rng();
    match Terminal::available() {
        true => Parlor::new(Terminal, rng, Spinner::new(parlor::SPIN_DELAY)).run(),
        false => {
            let console = Lines::new(std::io::stdin().lock(), std::io::stdout());
            Parlor::new(console, rng, Spinner::new(parlor::SPIN_DELAY)).run()
        }
    }
}
