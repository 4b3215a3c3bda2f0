//! Common source code fixtures for tests.

use once_cell::sync::Lazy;

pub const HELLO_WORLD: &str = r#"fn main ( ) { println ! ( "Hello, world!" ) ; }"#;

pub const EMPTY_FILE: &str = "";

pub const COMMENTS_ONLY: &str = "// nothing here\n/* still nothing */\n";

// A small module exercising most item kinds
pub const MODULE_WITH_ITEMS: &str = r#"//! Geometry helpers

use std::fmt::{self, Display};
use std::ops::Add;

/// A point in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub struct Meters(pub f64);

pub enum Shape {
    Circle { center: Point, radius: f64 },
    Polygon(Vec<Point>),
    Empty,
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point { x: self.x + other.x, y: self.y + other.y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub trait Area {
    const UNIT: &'static str = "m2";

    fn area(&self) -> f64;
}

pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
static mut COUNTER: usize = 0;

pub type Polyline = Vec<Point>;

mod tests;
"#;

// Control flow and expressions inside bodies
pub const CONTROL_FLOW: &str = r#"fn classify(values: &[i32]) -> Option<usize> {
    let mut count = 0;
    'outer: for (i, v) in values.iter().enumerate() {
        if *v < 0 {
            continue;
        } else if *v == 0 {
            break 'outer;
        }
        match v % 3 {
            0 => count += 1,
            1 | 2 if i > 2 => {}
            _ => unreachable!(),
        }
    }
    while let Some(x) = next() {
        count = count.saturating_add(x as usize);
    }
    let Some(first) = values.first() else { return None };
    let total: i64 = values.iter().map(|&v| v as i64).sum();
    Some(count + (*first as usize) + total as usize)
}
"#;

// Generics, lifetimes, closures and async
pub const GENERICS: &str = r#"pub struct Cache<'a, K: Eq + Hash, V = ()>
where
    V: Clone,
{
    entries: HashMap<&'a K, V>,
}

impl<'a, K: Eq + Hash, V: Clone> Cache<'a, K, V> {
    pub fn get_or_insert_with<F>(&mut self, key: &'a K, make: F) -> &V
    where
        F: FnOnce() -> V,
    {
        self.entries.entry(key).or_insert_with(make)
    }

    pub async fn refresh(&self) -> Result<(), Box<dyn std::error::Error + Send>> {
        let keys: Vec<_> = self.entries.keys().collect::<Vec<_>>();
        for key in keys {
            fetch(key).await?;
        }
        Ok(())
    }
}

fn apply<T>(f: impl Fn(T) -> T, x: T) -> T {
    let twice = move |y| f(f(y));
    twice(x)
}
"#;

// Macro definitions and invocations
pub const MACROS: &str = r#"macro_rules! square {
    ($x:expr) => {
        $x * $x
    };
    ($x:expr, $($rest:tt)*) => {{
        square!($x) + square!($($rest)*)
    }};
}

thread_local! {
    static DEPTH: Cell<u32> = Cell::new(0);
}

fn main() {
    let v = vec![1, 2, 3];
    assert_eq!(square!(2), 4);
    println!("{:?}", v);
}
"#;

/// Every fixture above that is expected to parse, with a label
pub static VALID_FIXTURES: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("hello_world", HELLO_WORLD),
        ("empty", EMPTY_FILE),
        ("comments_only", COMMENTS_ONLY),
        ("module_with_items", MODULE_WITH_ITEMS),
        ("control_flow", CONTROL_FLOW),
        ("generics", GENERICS),
        ("macros", MACROS),
    ]
});
