use clap::Parser;
use miette::Result;
use reedline::{
    DefaultCompleter, DefaultPrompt, DefaultPromptSegment, DescriptionMode, EditCommand, Emacs,
    IdeMenu, KeyCode, KeyModifiers, Keybindings, MenuBuilder, Reedline, ReedlineEvent,
    ReedlineMenu, Signal, default_emacs_keybindings,
};
use std::io::{self, BufRead, BufReader, Write};

mod commands;
mod highlighter;
mod lexer;

use commands::{Outcome, Session};
use highlighter::CommandHighlighter;

/// Geocalc - an interactive calculator for elementary 2-D geometry
#[derive(Parser, Debug)]
#[command(name = "geocalc")]
#[command(about = "Create named shapes and evaluate geometry expressions", long_about = None)]
struct Args {
    /// Print the classified tokens before evaluating an expression (for debugging)
    #[arg(long)]
    debug_tokens: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn add_menu_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu("completion_menu".to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let commands: Vec<String> = lexer::VOCABULARY.iter().map(|s| s.to_string()).collect();

    let completer = Box::new({
        let mut completions = DefaultCompleter::with_inclusions(&['_']);
        completions.insert(commands);
        completions
    });

    // Use the interactive menu to select options from the completer
    let ide_menu = IdeMenu::default()
        .with_name("completion_menu")
        .with_min_completion_width(0)
        .with_max_completion_width(50)
        .with_padding(0)
        .with_cursor_offset(0)
        .with_description_mode(DescriptionMode::PreferRight)
        .with_correct_cursor_pos(false);

    let completion_menu = Box::new(ide_menu);

    let mut keybindings = default_emacs_keybindings();
    add_menu_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));

    let line_editor = Reedline::create()
        .with_highlighter(Box::new(CommandHighlighter))
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("geocalc".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Prompt on stdout and read one follow-up line from stdin.
fn read_followup(prompt_text: &str) -> Option<String> {
    print!("{prompt_text}");
    io::stdout().flush().ok()?;

    let mut reply = String::new();
    match io::stdin().read_line(&mut reply) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(reply.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use GEOCALC_LOG or RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_env("GEOCALC_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let is_interactive = atty::is(atty::Stream::Stdin);
    let color = !args.no_color && atty::is(atty::Stream::Stdout);
    let mut session = Session::new(io::stdout(), color, args.debug_tokens);

    if is_interactive {
        // Interactive REPL mode
        let (mut line_editor, prompt) = setup_reedline();

        println!("Geometric Calculator (type 'exit' to quit)");

        loop {
            let sig = match line_editor.read_line(&prompt) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Reedline error: {e}");
                    return Ok(());
                }
            };

            match sig {
                Signal::Success(buffer) => {
                    let mut ask = |prompt_text: &str| read_followup(prompt_text);
                    match session.dispatch(&buffer, &mut ask) {
                        Ok(Outcome::Continue) => {}
                        Ok(Outcome::Exit) => return Ok(()),
                        Err(e) => {
                            eprintln!("Error writing output: {e}");
                            return Ok(());
                        }
                    }
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = io::stdin();
        let mut lines = BufReader::new(stdin.lock()).lines();

        loop {
            let Some(line) = lines.next() else {
                break;
            };
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("Error reading line from stdin: {}", e);
                    return Ok(());
                }
            };

            // Follow-up prompts read the next piped lines; nothing is
            // echoed for them.
            let mut ask = |_prompt_text: &str| lines.next().and_then(|result| result.ok());
            match session.dispatch(&line, &mut ask) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Exit) => break,
                Err(e) => {
                    eprintln!("Error writing output: {e}");
                    return Ok(());
                }
            }
        }
    }

    Ok(())
}
