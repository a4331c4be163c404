use minesweeper::{config, Board, GameState, Position, RevealKind, RevealOutcome};
use std::io::{self, Write};

fn main() {
    match run() {
        Ok(()) => println!("Thanks for playing Minesweeper!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run() -> io::Result<()> {
    println!("Welcome to Minesweeper!");
    println!();

    loop {
        play_round()?;
        if !ask_play_again()? {
            break;
        }
    }
    Ok(())
}

fn play_round() -> io::Result<()> {
    let size = prompt_grid_size()?;
    let mines = prompt_mine_count(size)?;

    let mut board = match Board::new(size, mines) {
        Ok(board) => board,
        Err(e) => {
            println!("Could not start the game: {}", e);
            return Ok(());
        }
    };

    while board.state() == GameState::Playing {
        print_board(&board, false);

        let input = prompt("Select a square to reveal (e.g. A1): ")?;
        if input.is_empty() {
            println!("Please enter a position (e.g. A1).");
            continue;
        }

        let pos = match board.parse_position(&input) {
            Ok(pos) => pos,
            Err(e) => {
                println!("{}. Please try again (format: A1, B2, ...).", e);
                println!();
                continue;
            }
        };

        match board.reveal_cell(pos) {
            Ok(outcome) => describe_outcome(&outcome),
            Err(e) => println!("{}. Please try again.", e),
        }
    }

    print_board(&board, true);
    match board.state() {
        GameState::Won => println!("Congratulations, you have won the game!"),
        GameState::Lost => println!("Oh no, you detonated a mine! Game over."),
        GameState::Playing => unreachable!(),
    }
    println!();
    Ok(())
}

fn print_board(board: &Board, show_mines: bool) {
    if show_mines {
        println!("\nFinal minefield:");
    } else {
        println!("\nHere is your minefield:");
    }

    // Column numbers across the top, row letters down the side.
    print!("  ");
    for col in 1..=board.size() {
        print!("{} ", col);
    }
    println!();

    for row in 0..board.size() {
        print!("{} ", char::from(b'A' + row as u8));
        for col in 0..board.size() {
            let cell = board.get_cell(Position::new(row, col)).unwrap();
            if cell.has_mine() && (show_mines || cell.is_revealed()) {
                print!("* ");
            } else if cell.is_revealed() {
                print!("{} ", cell.adjacent_mines());
            } else {
                print!("_ ");
            }
        }
        println!();
    }
    println!();
}

fn describe_outcome(outcome: &RevealOutcome) {
    match outcome.kind {
        RevealKind::Revealed | RevealKind::Won => {
            if outcome.adjacent_mines == 1 {
                println!("This square contains 1 adjacent mine.");
            } else {
                println!("This square contains {} adjacent mines.", outcome.adjacent_mines);
            }
        }
        RevealKind::AlreadyRevealed => println!("This square is already revealed."),
        RevealKind::MineHit => {}
    }
    println!();
}

fn prompt_grid_size() -> io::Result<usize> {
    loop {
        let input = prompt("Enter the size of the grid (e.g. 4 for a 4x4 grid): ")?;
        match input.parse::<usize>() {
            Ok(size) if (Board::MIN_SIZE..=Board::MAX_SIZE).contains(&size) => return Ok(size),
            Ok(_) => println!(
                "Grid size must be between {} and {}. Please try again.",
                Board::MIN_SIZE,
                Board::MAX_SIZE
            ),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn prompt_mine_count(size: usize) -> io::Result<usize> {
    let max = config::max_mines(size);
    loop {
        let input =
            prompt("Enter the number of mines to place on the grid (maximum is 35% of the total squares): ")?;
        match input.parse::<usize>() {
            Ok(mines) if config::is_valid_mine_count(size, mines) => return Ok(mines),
            Ok(_) => println!(
                "Invalid number of mines. Please enter between 1 and {} mines.",
                max
            ),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

fn ask_play_again() -> io::Result<bool> {
    loop {
        let input = prompt("Do you want to play again? (y/n): ")?.to_lowercase();
        match input.as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please enter 'y' for yes or 'n' for no."),
        }
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(input.trim().to_string())
}
