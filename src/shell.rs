//! Line-oriented console menus driving the library and the SOLID showcase.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use colored::Colorize;
use log::debug;
use thiserror::Error;

use crate::{
    error::{EntryKind, LibraryError},
    events::BookEvent,
    library::Library,
    observers::NoticeBoard,
    solid::{
        Application, Bird, Circle, Eater, Employee, Flyer, Human, Ostrich, Rectangle, Robot, Role,
        SalaryCalculator, Shape, Worker, message_service_for,
    },
};

/// A menu line that does not name any option
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid menu choice `{0}`")]
pub struct InvalidChoice(pub String);

/// Parse a numbered menu line, mapping the number through `pick`
fn parse_menu<T>(line: &str, pick: fn(u32) -> Option<T>) -> Result<T, InvalidChoice> {
    line.trim().parse::<u32>().ok().and_then(pick).ok_or_else(|| InvalidChoice(line.to_string()))
}

/// Top level menu options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    /// Open the library management menu
    Library,
    /// Open the SOLID showcase menu
    Solid,
    /// End the session
    Exit,
}

impl FromStr for MainChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_menu(s, |n| match n {
            1 => Some(Self::Library),
            2 => Some(Self::Solid),
            3 => Some(Self::Exit),
            _ => None,
        })
    }
}

/// Library management commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryCommand {
    /// Register a book
    AddBook,
    /// Register a member
    AddMember,
    /// Lend a book out
    Borrow,
    /// Take a book back
    Return,
    /// Print every book in insertion order
    ListBooks,
    /// Print every member in insertion order
    ListMembers,
    /// Leave the library menu
    Back,
    /// Print the recorded lending transitions
    ShowHistory,
}

impl FromStr for LibraryCommand {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_menu(s, |n| match n {
            1 => Some(Self::AddBook),
            2 => Some(Self::AddMember),
            3 => Some(Self::Borrow),
            4 => Some(Self::Return),
            5 => Some(Self::ListBooks),
            6 => Some(Self::ListMembers),
            7 => Some(Self::Back),
            8 => Some(Self::ShowHistory),
            _ => None,
        })
    }
}

/// SOLID showcase options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolidChoice {
    /// Salary calculation kept apart from the employee record
    SingleResponsibility,
    /// Areas of shapes behind one trait
    OpenClosed,
    /// Flyers that may refuse to fly
    LiskovSubstitution,
    /// Separate work and eat capabilities
    InterfaceSegregation,
    /// Application using an injected message service
    DependencyInversion,
    /// Leave the showcase menu
    Back,
}

impl FromStr for SolidChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_menu(s, |n| match n {
            1 => Some(Self::SingleResponsibility),
            2 => Some(Self::OpenClosed),
            3 => Some(Self::LiskovSubstitution),
            4 => Some(Self::InterfaceSegregation),
            5 => Some(Self::DependencyInversion),
            6 => Some(Self::Back),
            _ => None,
        })
    }
}

/// What a submenu asks of its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Show the current menu again
    Stay,
    /// Return to the main menu
    Back,
    /// Input is exhausted; end the session
    Quit,
}

/// Interactive console over a library
#[derive(Debug)]
pub struct Shell<R, W> {
    /// The library commands are applied to
    library: Library,
    /// Source of menu selections and answers
    input: R,
    /// Where prompts and results are written
    output: W,
    /// Notices posted by observers, printed after each library command
    notices: NoticeBoard,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over `library`, reading from `input` and writing to `output`
    #[must_use]
    pub fn new(library: Library, input: R, output: W) -> Self {
        Self { library, input, output, notices: NoticeBoard::default() }
    }

    /// Print the notices posted to `notices` through this shell's output
    #[must_use]
    pub fn with_notices(mut self, notices: NoticeBoard) -> Self {
        self.notices = notices;
        self
    }

    /// The library commands are applied to
    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Give back the library and the output sink
    pub fn into_parts(self) -> (Library, W) {
        (self.library, self.output)
    }

    /// Run the main menu until Exit is chosen or input ends
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised while reading input or writing output.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", "Choose an option:".bold())?;
            writeln!(self.output, "1. Library Management System")?;
            writeln!(self.output, "2. Demonstrate SOLID Principles")?;
            writeln!(self.output, "3. Exit")?;

            let Some(line) = self.read_line()? else { break };
            let flow = match line.parse::<MainChoice>() {
                Ok(MainChoice::Library) => self.library_menu()?,
                Ok(MainChoice::Solid) => self.solid_menu()?,
                Ok(MainChoice::Exit) => Flow::Quit,
                Err(e) => {
                    debug!("{e}");
                    self.invalid_choice()?;
                    Flow::Stay
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()
    }

    /// Library management submenu
    fn library_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n{}", "Library Management System".bold())?;
            writeln!(self.output, "1. Add Book")?;
            writeln!(self.output, "2. Add Member")?;
            writeln!(self.output, "3. Borrow Book")?;
            writeln!(self.output, "4. Return Book")?;
            writeln!(self.output, "5. List Books")?;
            writeln!(self.output, "6. List Members")?;
            writeln!(self.output, "7. Back to Main Menu")?;
            writeln!(self.output, "8. Show Lending History")?;

            let Some(line) = self.read_line()? else { return Ok(Flow::Quit) };
            let flow = match line.parse::<LibraryCommand>() {
                Ok(command) => {
                    debug!("library command {command:?}");
                    let flow = self.execute(command)?;
                    self.print_notices()?;
                    flow
                }
                Err(e) => {
                    debug!("{e}");
                    self.invalid_choice()?;
                    Flow::Stay
                }
            };
            if flow != Flow::Stay {
                return Ok(flow);
            }
        }
    }

    /// Apply one library command and report the outcome
    fn execute(&mut self, command: LibraryCommand) -> io::Result<Flow> {
        match command {
            LibraryCommand::AddBook => {
                let Some(id) = self.prompt("Enter book ID:")? else { return Ok(Flow::Quit) };
                let Some(name) = self.prompt("Enter book name:")? else { return Ok(Flow::Quit) };
                match self.library.add_book(&id, &name) {
                    Ok(_) => writeln!(self.output, "{}", format!("Book added: {name}").green())?,
                    Err(e) => self.report(&e)?,
                }
            }
            LibraryCommand::AddMember => {
                let Some(id) = self.prompt("Enter member ID:")? else { return Ok(Flow::Quit) };
                let Some(name) = self.prompt("Enter member name:")? else {
                    return Ok(Flow::Quit);
                };
                match self.library.add_member(&id, &name) {
                    Ok(_) => writeln!(self.output, "{}", format!("Member added: {name}").green())?,
                    Err(e) => self.report(&e)?,
                }
            }
            LibraryCommand::Borrow => {
                let Some(id) = self.prompt("Enter book ID to borrow:")? else {
                    return Ok(Flow::Quit);
                };
                match self.library.borrow(&id) {
                    Ok(book) => {
                        let message = format!("Book borrowed: {}", book.name());
                        writeln!(self.output, "{}", message.green())?;
                    }
                    Err(e) => self.report(&e)?,
                }
            }
            LibraryCommand::Return => {
                let Some(id) = self.prompt("Enter book ID to return:")? else {
                    return Ok(Flow::Quit);
                };
                match self.library.return_book(&id) {
                    Ok(book) => {
                        let message = format!("Book returned: {}", book.name());
                        writeln!(self.output, "{}", message.green())?;
                    }
                    Err(e) => self.report(&e)?,
                }
            }
            LibraryCommand::ListBooks => {
                writeln!(self.output, "Books in the library:")?;
                for book in self.library.list_books() {
                    writeln!(
                        self.output,
                        "ID: {}, Name: {}, Available: {}",
                        book.id(),
                        book.name(),
                        book.is_available()
                    )?;
                }
            }
            LibraryCommand::ListMembers => {
                writeln!(self.output, "Library members:")?;
                for member in self.library.list_members() {
                    writeln!(self.output, "ID: {}, Name: {}", member.id(), member.name())?;
                }
            }
            LibraryCommand::ShowHistory => self.print_history()?,
            LibraryCommand::Back => return Ok(Flow::Back),
        }
        Ok(Flow::Stay)
    }

    /// Print whatever observers posted while the last command ran
    fn print_notices(&mut self) -> io::Result<()> {
        for notice in self.notices.drain() {
            writeln!(self.output, "{}", notice.green())?;
        }
        Ok(())
    }

    /// Print the lending history, oldest first
    fn print_history(&mut self) -> io::Result<()> {
        let history = self.library.history();
        if history.is_empty() {
            return writeln!(self.output, "No lending activity yet.");
        }
        writeln!(self.output, "Lending History:")?;
        for (n, transition) in (1_usize..).zip(history) {
            writeln!(
                self.output,
                "{n}. {}: {:?} --({:?})--> {:?}",
                transition.book_id, transition.from, transition.event, transition.to
            )?;
        }
        Ok(())
    }

    /// Describe a failed library operation in the console's wording
    fn report(&mut self, error: &LibraryError) -> io::Result<()> {
        let message = match error {
            LibraryError::NotFound { kind, .. } => format!("{} not found.", capitalize(*kind)),
            LibraryError::InvalidState { event: BookEvent::Borrow, .. } => {
                "Book is not available.".to_string()
            }
            LibraryError::InvalidState { event: BookEvent::Return, .. } => {
                "Book was not borrowed.".to_string()
            }
            LibraryError::DuplicateId { kind, id } => {
                format!("{} ID {id} is already registered.", capitalize(*kind))
            }
        };
        writeln!(self.output, "{}", message.red())
    }

    /// SOLID showcase submenu
    fn solid_menu(&mut self) -> io::Result<Flow> {
        loop {
            writeln!(self.output, "\n{}", "Choose a SOLID Principle to demonstrate:".bold())?;
            writeln!(self.output, "1. Single Responsibility Principle (SRP)")?;
            writeln!(self.output, "2. Open/Closed Principle (OCP)")?;
            writeln!(self.output, "3. Liskov Substitution Principle (LSP)")?;
            writeln!(self.output, "4. Interface Segregation Principle (ISP)")?;
            writeln!(self.output, "5. Dependency Inversion Principle (DIP)")?;
            writeln!(self.output, "6. Back to Main Menu")?;

            let Some(line) = self.read_line()? else { return Ok(Flow::Quit) };
            let flow = match line.parse::<SolidChoice>() {
                Ok(choice) => self.demonstrate(choice)?,
                Err(e) => {
                    debug!("{e}");
                    self.invalid_choice()?;
                    Flow::Stay
                }
            };
            if flow != Flow::Stay {
                return Ok(flow);
            }
        }
    }

    /// Run one SOLID demonstration
    fn demonstrate(&mut self, choice: SolidChoice) -> io::Result<Flow> {
        match choice {
            SolidChoice::SingleResponsibility => {
                let Some(name) = self.prompt("Enter employee name:")? else {
                    return Ok(Flow::Quit);
                };
                let Some(role) = self.prompt("Enter employee role (Manager, Developer, Intern):")?
                else {
                    return Ok(Flow::Quit);
                };
                let employee = Employee::new(name, Role::from(role.as_str()));
                let salary = SalaryCalculator.calculate(&employee);
                writeln!(self.output, "Salary for {}: {salary:?}", employee.name())?;
            }
            SolidChoice::OpenClosed => {
                let width = match self.prompt_number("Enter rectangle width:")? {
                    Ok(width) => width,
                    Err(flow) => return Ok(flow),
                };
                let height = match self.prompt_number("Enter rectangle height:")? {
                    Ok(height) => height,
                    Err(flow) => return Ok(flow),
                };
                let rectangle = Rectangle { width, height };
                writeln!(self.output, "Area of Rectangle: {:?}", rectangle.area())?;

                let radius = match self.prompt_number("Enter circle radius:")? {
                    Ok(radius) => radius,
                    Err(flow) => return Ok(flow),
                };
                writeln!(self.output, "Area of Circle: {:?}", Circle { radius }.area())?;
            }
            SolidChoice::LiskovSubstitution => {
                let birds: [&dyn Flyer; 2] = [&Bird, &Ostrich];
                for bird in birds {
                    match bird.fly() {
                        Ok(message) => writeln!(self.output, "{message}")?,
                        Err(e) => writeln!(self.output, "{e}")?,
                    }
                }
            }
            SolidChoice::InterfaceSegregation => {
                writeln!(self.output, "{}", Robot.work())?;
                writeln!(self.output, "{}", Human.work())?;
                writeln!(self.output, "{}", Human.eat())?;
            }
            SolidChoice::DependencyInversion => {
                let question = "Choose message service (1 for Email, 2 for SMS):";
                let service = match self.prompt_number(question)? {
                    Ok(service) => service,
                    Err(flow) => return Ok(flow),
                };
                let Some(message) = self.prompt("Enter message to send:")? else {
                    return Ok(Flow::Quit);
                };
                let app = Application::new(message_service_for(service));
                writeln!(self.output, "{}", app.send(&message))?;
            }
            SolidChoice::Back => return Ok(Flow::Back),
        }
        Ok(Flow::Stay)
    }

    /// Read one line without its terminator; `None` once input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print a question and read the trimmed answer
    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{question}")?;
        Ok(self.read_line()?.map(|answer| answer.trim().to_string()))
    }

    /// Like `prompt`, with the answer parsed as a number
    ///
    /// The error carries the flow to follow instead: `Quit` when input is
    /// exhausted, `Stay` once a malformed number has been reported.
    fn prompt_number<T: FromStr>(&mut self, question: &str) -> io::Result<Result<T, Flow>> {
        let Some(answer) = self.prompt(question)? else { return Ok(Err(Flow::Quit)) };
        match answer.parse() {
            Ok(value) => Ok(Ok(value)),
            Err(_) => {
                writeln!(self.output, "{}", "Invalid number.".red())?;
                Ok(Err(Flow::Stay))
            }
        }
    }

    /// Complain about an unknown menu line
    fn invalid_choice(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "Invalid choice. Please try again.".red())
    }
}

/// Entry kind with a leading capital, for sentence starts
fn capitalize(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Book => "Book",
        EntryKind::Member => "Member",
    }
}
