use rand::{thread_rng, Rng};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;

mod dataset;
mod persist;
mod quiz;
mod session;

use crate::dataset::Dataset;
use crate::quiz::question::{AnswerMode, AnswerOption, Prompt};
use crate::quiz::settings::Settings;
use crate::session::{Judgement, Session};

fn main() {
    let path: PathBuf = env::args()
        .nth(1)
        .unwrap_or_else(|| "data/animals.json".to_owned())
        .into();
    let dataset = match Dataset::open(&path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Could not load dataset: {:#}", e);
            exit(1);
        }
    };

    let mut saved_best = persist::read_best_streak();
    let mut session = Session::new(thread_rng(), saved_best);
    let default_count = Settings::default().default_question_count;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("quizcraft: how well do you know your dataset?");
    if saved_best > 0 {
        println!("Best streak so far: {}", saved_best);
    }

    loop {
        println!("\nCategories:");
        for (index, name) in dataset.category_names().iter().enumerate() {
            println!("  {}) {}", index + 1, name);
        }
        let selection = match prompt_line(
            &mut input,
            "Pick categories (numbers or names, blank for all, q to quit): ",
        ) {
            Some(selection) => selection,
            None => break,
        };
        if selection.trim() == "q" {
            break;
        }
        let categories = parse_selection(&dataset, &selection);

        let count = match prompt_line(&mut input, &format!("How many questions? [{}]: ", default_count)) {
            Some(count) => count,
            None => break,
        };
        let count = count.trim().parse().unwrap_or(default_count);

        if let Err(e) = session.start(&dataset, &categories, count) {
            println!("{}", e);
            continue;
        }
        run_quiz(&mut input, &mut session, &mut saved_best);
        session.reset();
    }
}

fn run_quiz(input: &mut impl BufRead, session: &mut Session<impl Rng>, saved_best: &mut u32) {
    loop {
        let turn = match session.advance() {
            Ok(Some(turn)) => turn,
            Ok(None) => break,
            Err(e) => {
                println!("{}", e);
                break;
            }
        };

        println!("\nQuestion {}/{}", turn.number, turn.total);
        println!("{}", prompt_text(&turn.prompt));

        let answer = match &turn.mode {
            AnswerMode::FreeText => prompt_line(input, "Type your answer: "),
            AnswerMode::MultipleChoice(options) => read_choice(input, &turn.prompt, options),
        };
        let answer = match answer {
            Some(answer) => answer,
            // Input is gone, abandon the quiz
            None => return,
        };

        match session.submit(answer.trim()) {
            Ok(judgement) => print_judgement(&judgement),
            Err(e) => println!("{}", e),
        }
        println!("Score: {}, streak: {}", session.score(), session.streak());

        if session.best_streak() > *saved_best {
            *saved_best = session.best_streak();
            println!("New best streak: {}!", saved_best);
            if let Err(e) = persist::write_best_streak(*saved_best) {
                eprintln!("Could not save best streak: {:#}", e);
            }
        }
    }

    if let Some(summary) = session.summary() {
        println!("\nQuiz over! Final score: {}/{}", summary.score, summary.attempted);
        println!("Best streak: {}", summary.best_streak);
    }
}

fn parse_selection(dataset: &Dataset, input: &str) -> Vec<String> {
    let names = dataset.category_names();
    if input.trim().is_empty() {
        return names.iter().map(|name| name.to_string()).collect();
    }
    let mut selected = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let name = match token.parse::<usize>() {
            Ok(number) if number >= 1 && number <= names.len() => Some(names[number - 1]),
            Ok(_) => None,
            Err(_) => names
                .iter()
                .find(|name| name.eq_ignore_ascii_case(token))
                .copied(),
        };
        match name {
            Some(name) => {
                let name = name.to_owned();
                if !selected.contains(&name) {
                    selected.push(name);
                }
            }
            None => println!("Unknown category: {}", token),
        }
    }
    selected
}

fn read_choice(input: &mut impl BufRead, prompt: &Prompt, options: &[AnswerOption]) -> Option<String> {
    for (index, option) in options.iter().enumerate() {
        println!("  {}) {}", index + 1, option_text(prompt, option));
    }
    loop {
        let line = prompt_line(input, "Your pick: ")?;
        match line.trim().parse::<usize>() {
            Ok(number) if number >= 1 && number <= options.len() => {
                return Some(options[number - 1].label.clone());
            }
            _ => println!("Pick a number between 1 and {}", options.len()),
        }
    }
}

fn print_judgement(judgement: &Judgement) {
    if judgement.correct && judgement.near_miss {
        println!(
            "Correct! (We'll let that typo slide, it's spelled \"{}\")",
            judgement.canonical_answer
        );
    } else if judgement.correct {
        println!("Correct!");
    } else {
        println!("Wrong! The answer was \"{}\"", judgement.canonical_answer);
    }
}

fn prompt_text(prompt: &Prompt) -> String {
    match prompt {
        Prompt::AttributesToName { clauses } => {
            let clauses: Vec<String> = clauses
                .iter()
                .map(|(property, value)| format!("{} = {}", property, value))
                .collect();
            format!("Which one has {}?", clauses.join(" and "))
        }
        Prompt::NameToAttribute { name, property } => {
            format!("What is the {} of {}?", property, name)
        }
        Prompt::NameToImage { name } => format!("Which picture shows {}?", name),
        Prompt::ImageToName { image } => format!("Who is pictured in {}?", image),
    }
}

fn option_text(prompt: &Prompt, option: &AnswerOption) -> String {
    match (prompt, &option.image) {
        // For picture answers the label would give the name away
        (Prompt::NameToImage { .. }, Some(image)) => image.clone(),
        _ => option.label.clone(),
    }
}

// Returns None when the input has run out, so callers can quit instead of
// re-prompting forever.
fn prompt_line(input: &mut impl BufRead, message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok();
    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}
