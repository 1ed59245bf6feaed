//! Small demonstrations of the SOLID design principles.
//!
//! Each principle is shown with the smallest set of types that makes the
//! point. Behaviour is returned as values so the console shell decides how
//! to present it.

use std::f64::consts::PI;

use thiserror::Error;

// Single responsibility: data and salary policy live in separate types.

/// Job title of an employee
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    /// Paid 80000
    Manager,
    /// Paid 60000
    Developer,
    /// Paid 20000
    Intern,
    /// Any title the salary policy does not know about
    Other(String),
}

impl From<&str> for Role {
    fn from(title: &str) -> Self {
        match title.trim() {
            "Manager" => Self::Manager,
            "Developer" => Self::Developer,
            "Intern" => Self::Intern,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Employee details, with no knowledge of pay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Full name
    name: String,
    /// Job title
    role: Role,
}

impl Employee {
    /// Create an employee with the given name and role
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self { name: name.into(), role }
    }

    /// Full name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Job title
    #[must_use]
    pub fn role(&self) -> &Role {
        &self.role
    }
}

/// Salary policy kept apart from employee data
#[derive(Debug, Default, Clone, Copy)]
pub struct SalaryCalculator;

impl SalaryCalculator {
    /// Yearly salary for the employee's role; unknown titles earn nothing
    #[must_use]
    pub fn calculate(self, employee: &Employee) -> f64 {
        match employee.role() {
            Role::Manager => 80_000.0,
            Role::Developer => 60_000.0,
            Role::Intern => 20_000.0,
            Role::Other(_) => 0.0,
        }
    }
}

// Open/closed: new shapes are added by implementing the trait.

/// Anything with a computable area
pub trait Shape {
    /// Surface covered by the shape
    fn area(&self) -> f64;
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Circle around the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Distance from the centre to the edge
    pub radius: f64,
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

// Liskov substitution: flying is a fallible capability, not an assumption.

/// Reason a bird stayed on the ground
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct FlightError(pub &'static str);

/// Something that may attempt to fly
pub trait Flyer {
    /// Attempt to fly, describing the outcome
    ///
    /// # Errors
    ///
    /// Returns `FlightError` when the creature cannot fly.
    fn fly(&self) -> Result<&'static str, FlightError>;
}

/// A bird that can fly
#[derive(Debug, Default, Clone, Copy)]
pub struct Bird;

impl Flyer for Bird {
    fn fly(&self) -> Result<&'static str, FlightError> {
        Ok("The bird is flying.")
    }
}

/// A bird that cannot
#[derive(Debug, Default, Clone, Copy)]
pub struct Ostrich;

impl Flyer for Ostrich {
    fn fly(&self) -> Result<&'static str, FlightError> {
        Err(FlightError("Ostriches cannot fly."))
    }
}

// Interface segregation: narrow traits, implemented only where they apply.

/// Something that can do work
pub trait Worker {
    /// Describe the work being done
    fn work(&self) -> &'static str;
}

/// Something that needs to eat
pub trait Eater {
    /// Describe the meal
    fn eat(&self) -> &'static str;
}

/// Works, never eats
#[derive(Debug, Default, Clone, Copy)]
pub struct Robot;

impl Worker for Robot {
    fn work(&self) -> &'static str {
        "The robot is working."
    }
}

/// Works and eats
#[derive(Debug, Default, Clone, Copy)]
pub struct Human;

impl Worker for Human {
    fn work(&self) -> &'static str {
        "The human is working."
    }
}

impl Eater for Human {
    fn eat(&self) -> &'static str {
        "The human is eating."
    }
}

// Dependency inversion: the application depends on the abstraction only.

/// Delivery channel for text messages
pub trait MessageService {
    /// Deliver `message`, returning the transcript of what was sent
    fn send_message(&self, message: &str) -> String;
}

/// Delivers by email
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailService;

impl MessageService for EmailService {
    fn send_message(&self, message: &str) -> String {
        format!("Sending Email: {message}")
    }
}

/// Delivers by text message
#[derive(Debug, Default, Clone, Copy)]
pub struct SmsService;

impl MessageService for SmsService {
    fn send_message(&self, message: &str) -> String {
        format!("Sending SMS: {message}")
    }
}

/// Sends messages through whatever service it was built with
#[derive(Debug)]
pub struct Application<S> {
    /// Injected delivery channel
    service: S,
}

impl<S: MessageService> Application<S> {
    /// Build an application around `service`
    #[must_use]
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Send `message` through the injected service
    #[must_use]
    pub fn send(&self, message: &str) -> String {
        self.service.send_message(message)
    }
}

/// Pick a message service from a menu choice: 1 is email, anything else SMS
///
/// Any integer is accepted, negative ones included.
#[must_use]
pub fn message_service_for(choice: i64) -> Box<dyn MessageService> {
    if choice == 1 { Box::new(EmailService) } else { Box::new(SmsService) }
}

impl MessageService for Box<dyn MessageService> {
    fn send_message(&self, message: &str) -> String {
        (**self).send_message(message)
    }
}
