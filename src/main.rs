use cmdline_panel::{BufferSurface, DisplayController, DisplaySurface, Trigger};
use std::io::{self, Write};

// drive the panel from a terminal, prints whatever the textarea would hold
fn main() {
    let mut controller = DisplayController::new(BufferSurface::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("triggers: {} (exit to quit)", Trigger::names().join(", "));
    loop {
        print!("[panel] ➤ ");
        if stdout.flush().is_err() {
            break;
        }
        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = input.trim();
        if input == "exit" { break; }
        if input.is_empty() { continue; }
        match Trigger::from_name(input) {
            Ok(trigger) => {
                trigger.fire(&mut controller);
                println!("{}", controller.surface().content());
            }
            Err(e) => println!("Error: {}", e),
        }
    }
}
