//! Text renderings of a [`Tree`]. These are for people to read, nothing parses them.

use std::io::{self, Write};

use crate::tree::{Order, Tree};

/// How many spaces each level of the rotated view is indented past its parent.
const INDENT_STEP: usize = 5;

impl Tree {
    /// Writes the cities in ascending order, one per line.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let tree = Tree::new().insert("London").insert("Berlin").insert("Tokyo");
    /// let mut out = Vec::new();
    /// tree.write_inorder(&mut out)?;
    ///
    /// assert_eq!(String::from_utf8(out).unwrap(), "Berlin\nLondon\nTokyo\n");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_inorder<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for city in self {
            writeln!(out, "{city}")?;
        }

        Ok(())
    }

    /// Prints the cities in ascending order to stdout. See [`Tree::write_inorder`].
    pub fn print_inorder(&self) -> io::Result<()> {
        self.write_inorder(&mut io::stdout().lock())
    }

    /// Writes the tree turned 90° counter-clockwise: the root sits at the
    /// left margin (after `indent` spaces) and every level down is indented
    /// five more spaces. Right subtrees come out above their parent, left
    /// subtrees below. Each city is preceded by an empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use citybst::Tree;
    ///
    /// let tree = Tree::new().insert("London").insert("Berlin").insert("Tokyo");
    /// let mut out = Vec::new();
    /// tree.write_rotated(&mut out, 0)?;
    ///
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "\n     Tokyo\n\nLondon\n\n     Berlin\n",
    /// );
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_rotated<W: Write>(&self, out: &mut W, indent: usize) -> io::Result<()> {
        for (depth, node) in self.walk(Order::Descending) {
            let width = indent + depth * INDENT_STEP;
            writeln!(out)?;
            writeln!(out, "{:width$}{}", "", node.city())?;
        }

        Ok(())
    }

    /// Prints the rotated view to stdout. See [`Tree::write_rotated`].
    pub fn print_rotated(&self, indent: usize) -> io::Result<()> {
        self.write_rotated(&mut io::stdout().lock(), indent)
    }
}
