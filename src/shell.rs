// Line-oriented command interpreter driving a `TypedArrayList<i32>`.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use comparator::Comparator;
use static_array_list::{report, ArrayListError, TypedArrayList, DEFAULT_CMP};
use thiserror::Error;

const HELP: &str = "\
Fixed-capacity array list demo. Commands are case-insensitive:

H - show this help
Q - quit

N [size] - create a new list holding up to size elements
D        - destroy the list
L        - show length, capacity and element size

C       - clear the list
F [val] - fill the list with val

I [pos] [val] - insert val at pos
R [pos]       - remove the element at pos
G [pos]       - get the element at pos
M [pos] [val] - modify the element at pos

S [val]          - search for the first element equal to val
P [val] [newval] - replace every element equal to val

A - sort ascending
T - traverse forward
B - traverse backward";

#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Error)]
enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown command '{0}', type H for help")]
    Unknown(char),
    #[error(transparent)]
    List(#[from] ArrayListError),
}

enum Reply {
    Text(String),
    Quit,
}

pub struct Shell<W: Write> {
    list: Option<TypedArrayList<i32>>,
    out: W,
}

fn arg<T: FromStr>(args: &[&str], index: usize) -> Option<T> {
    args.get(index)?.parse().ok()
}

impl<W: Write> Shell<W> {
    pub fn new(out: W) -> Self {
        Self { list: None, out }
    }

    /// Execute commands line by line until `Q` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if self.execute(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let mut chars = line.trim().chars();
        let op = match chars.next() {
            Some(op) => op.to_ascii_uppercase(),
            None => return Ok(Flow::Continue),
        };
        let args: Vec<&str> = chars.as_str().split_whitespace().collect();
        match self.command(op, &args) {
            Ok(Reply::Text(text)) => writeln!(self.out, "{text}")?,
            Ok(Reply::Quit) => {
                writeln!(self.out, "Bye.")?;
                return Ok(Flow::Quit);
            }
            Err(err) => writeln!(self.out, "error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn list(&self) -> Result<&TypedArrayList<i32>, CommandError> {
        match self.list.as_ref() {
            Some(list) => Ok(list),
            None => Err(report("list", ArrayListError::NullPointer).into()),
        }
    }

    fn list_mut(&mut self) -> Result<&mut TypedArrayList<i32>, CommandError> {
        match self.list.as_mut() {
            Some(list) => Ok(list),
            None => Err(report("list", ArrayListError::NullPointer).into()),
        }
    }

    fn command(&mut self, op: char, args: &[&str]) -> Result<Reply, CommandError> {
        let text = match op {
            'H' => HELP.to_string(),
            'Q' => return Ok(Reply::Quit),
            'N' => {
                let size: usize = arg(args, 0).ok_or(CommandError::Usage("N size"))?;
                self.list = None;
                let list: TypedArrayList<i32> = TypedArrayList::new(size)?;
                let text = format!("created a list with capacity {}", list.capacity());
                self.list = Some(list);
                text
            }
            'D' => {
                self.list = None;
                "list destroyed".to_string()
            }
            'L' => self.status()?,
            'C' => {
                self.list_mut()?.clear();
                "list cleared".to_string()
            }
            'F' => {
                let value: i32 = arg(args, 0).ok_or(CommandError::Usage("F val"))?;
                self.list_mut()?.fill(&value)?;
                format!("filled with {value}")
            }
            'I' => {
                let (pos, value) = match (arg::<usize>(args, 0), arg::<i32>(args, 1)) {
                    (Some(pos), Some(value)) => (pos, value),
                    _ => return Err(CommandError::Usage("I pos val")),
                };
                self.list_mut()?.insert(pos, &value)?;
                format!("inserted {value} at position {pos}")
            }
            'R' => {
                let pos: usize = arg(args, 0).ok_or(CommandError::Usage("R pos"))?;
                self.list_mut()?.remove(pos)?;
                format!("removed the element at position {pos}")
            }
            'G' => {
                let pos: usize = arg(args, 0).ok_or(CommandError::Usage("G pos"))?;
                let value = self.list()?.get(pos)?;
                format!("the element at position {pos} is {value}")
            }
            'M' => {
                let (pos, value) = match (arg::<usize>(args, 0), arg::<i32>(args, 1)) {
                    (Some(pos), Some(value)) => (pos, value),
                    _ => return Err(CommandError::Usage("M pos val")),
                };
                self.list_mut()?.set(pos, &value)?;
                format!("modified position {pos} to {value}")
            }
            'S' => {
                let value: i32 = arg(args, 0).ok_or(CommandError::Usage("S val"))?;
                match self.list()?.find(&value, &DEFAULT_CMP)? {
                    Some(pos) => format!("index of {value} is {pos}"),
                    None => format!("{value} not found"),
                }
            }
            'P' => {
                let (value, new_value) = match (arg::<i32>(args, 0), arg::<i32>(args, 1)) {
                    (Some(value), Some(new_value)) => (value, new_value),
                    _ => return Err(CommandError::Usage("P val newval")),
                };
                let replaced = self.replace_all(value, new_value)?;
                format!("replaced {replaced} element(s)")
            }
            'A' => {
                self.list_mut()?.sort(&DEFAULT_CMP)?;
                "sorted".to_string()
            }
            'T' => self.traverse()?,
            'B' => self.traverse_backward()?,
            other => return Err(CommandError::Unknown(other)),
        };
        Ok(Reply::Text(text))
    }

    fn status(&self) -> Result<String, CommandError> {
        let list = self.list()?;
        let mut text = format!(
            "length = {}, capacity = {}, element size = {} byte(s)",
            list.len(),
            list.capacity(),
            list.elem_size()
        );
        if list.is_empty() {
            text.push_str("\nlist is empty");
        }
        if list.is_full() {
            text.push_str("\nlist is full");
        }
        Ok(text)
    }

    fn replace_all(&mut self, value: i32, new_value: i32) -> Result<usize, CommandError> {
        let mut it = self.list_mut()?.cursor_first_mut();
        let mut replaced = 0;
        while it.has_next() {
            if DEFAULT_CMP.compare(&value, &it.get_next()?).is_eq() {
                it.set_next(&new_value)?;
                replaced += 1;
            }
            it.move_next()?;
        }
        Ok(replaced)
    }

    fn traverse(&self) -> Result<String, CommandError> {
        let mut it = self.list()?.cursor_first();
        let mut items = Vec::new();
        while it.has_next() {
            items.push(it.get_next()?.to_string());
            it.move_next()?;
        }
        Ok(format!("[{}]", items.join(" ")))
    }

    fn traverse_backward(&self) -> Result<String, CommandError> {
        let mut it = self.list()?.cursor_last();
        let mut items = Vec::new();
        while it.has_prev() {
            items.push(it.get_prev()?.to_string());
            it.move_prev()?;
        }
        Ok(format!("[{}]", items.join(" ")))
    }
}
