use nalgebra::Vector3;

use crate::error::{CvmError, Result};
use crate::geometry::{Cluster, Site, Sublattice};

/// Parse a maximal-cluster resource.
///
/// The format is a nested brace list: one outer list of clusters, each
/// cluster a list of sublattices, each sublattice a list of three-component
/// sites:
///
/// ```text
/// {
///   {
///     { {0, 0, 0}, {0.25, 0.25, 0.25} }
///   }
/// }
/// ```
///
/// Commas are optional separators; whitespace and newlines carry no meaning.
pub fn parse_cluster_file(input: &str) -> Result<Vec<Cluster>> {
    let tokens = tokenize(input)?;
    let mut parser = TokenCursor::new(&tokens);
    let outer = parser.parse_node()?;
    parser.expect_end()?;

    let cluster_nodes = match outer {
        Node::List(items) => items,
        Node::Number(v) => {
            return Err(CvmError::input_format(format!(
                "expected '{{' opening the cluster list, found number {v}"
            )))
        }
    };
    if cluster_nodes.is_empty() {
        return Err(CvmError::input_format("cluster resource contains no clusters"));
    }

    cluster_nodes.into_iter().map(interpret_cluster).collect()
}

fn interpret_cluster(node: Node) -> Result<Cluster> {
    let sublattice_nodes = match node {
        Node::List(items) => items,
        Node::Number(v) => {
            return Err(CvmError::input_format(format!(
                "expected '{{' opening a cluster, found number {v}"
            )))
        }
    };
    if sublattice_nodes.is_empty() {
        return Err(CvmError::input_format("cluster has no sublattices"));
    }

    let sublattices = sublattice_nodes
        .into_iter()
        .map(interpret_sublattice)
        .collect::<Result<Vec<Sublattice>>>()?;
    Ok(Cluster::new(sublattices))
}

fn interpret_sublattice(node: Node) -> Result<Sublattice> {
    let site_nodes = match node {
        Node::List(items) => items,
        Node::Number(v) => {
            return Err(CvmError::input_format(format!(
                "expected '{{' opening a sublattice, found number {v}"
            )))
        }
    };
    if site_nodes.is_empty() {
        return Err(CvmError::input_format("sublattice has no sites"));
    }

    let sites = site_nodes
        .into_iter()
        .map(interpret_site)
        .collect::<Result<Vec<Site>>>()?;
    Ok(Sublattice::new(sites))
}

fn interpret_site(node: Node) -> Result<Site> {
    let components = match node {
        Node::List(items) => items,
        Node::Number(v) => {
            return Err(CvmError::input_format(format!(
                "expected '{{' opening a site, found number {v}"
            )))
        }
    };

    let mut coords = [0.0; 3];
    if components.len() != 3 {
        return Err(CvmError::input_format(format!(
            "site must have 3 coordinates, found {}",
            components.len()
        )));
    }
    for (slot, component) in coords.iter_mut().zip(components) {
        match component {
            Node::Number(v) => *slot = v,
            Node::List(_) => {
                return Err(CvmError::input_format("site coordinate must be a number, found a list"))
            }
        }
    }
    Ok(Site::new(Vector3::new(coords[0], coords[1], coords[2])))
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Open,
    Close,
    Number(f64),
}

#[derive(Debug)]
enum Node {
    Number(f64),
    List(Vec<Node>),
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            '{' => {
                tokens.push(Token::Open);
                chars.next();
            }
            '}' => {
                tokens.push(Token::Close);
                chars.next();
            }
            ',' => {
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            _ => {
                let mut literal = String::new();
                while let Some(&c) = chars.peek() {
                    if c == '{' || c == '}' || c == ',' || c.is_whitespace() {
                        break;
                    }
                    literal.push(c);
                    chars.next();
                }
                let value: f64 = literal
                    .parse()
                    .map_err(|_| CvmError::input_format(format!("invalid number '{literal}'")))?;
                tokens.push(Token::Number(value));
            }
        }
    }
    Ok(tokens)
}

struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse_node(&mut self) -> Result<Node> {
        match self.tokens.get(self.pos) {
            Some(Token::Open) => {
                self.pos += 1;
                let mut items = Vec::new();
                loop {
                    match self.tokens.get(self.pos) {
                        Some(Token::Close) => {
                            self.pos += 1;
                            return Ok(Node::List(items));
                        }
                        Some(_) => items.push(self.parse_node()?),
                        None => {
                            return Err(CvmError::input_format("unbalanced braces: missing '}'"))
                        }
                    }
                }
            }
            Some(Token::Number(v)) => {
                self.pos += 1;
                Ok(Node::Number(*v))
            }
            Some(Token::Close) => Err(CvmError::input_format("unbalanced braces: unexpected '}'")),
            None => Err(CvmError::input_format("empty cluster resource")),
        }
    }

    fn expect_end(&self) -> Result<()> {
        if self.pos == self.tokens.len() {
            Ok(())
        } else {
            Err(CvmError::input_format("trailing tokens after the outer cluster list"))
        }
    }
}
