pub trait Peek: Iterator {
    fn peek(&self) -> Option<Self::Item>;

    fn eat<P>(&mut self, pat: P) -> bool
    where
        Self::Item: PartialEq<P>,
    {
        match self.peek() {
            Some(item) if item == pat => {
                self.next();
                true
            }
            _ => false,
        }
    }

    /// Consume items for as long as `pred` holds, returning how many were eaten.
    fn eat_while(&mut self, mut pred: impl FnMut(&Self::Item) -> bool) -> usize {
        let mut n = 0;
        while matches!(self.peek(), Some(item) if pred(&item)) {
            self.next();
            n += 1;
        }
        n
    }

    fn at_end(&self) -> bool {
        self.peek().is_none()
    }
}

impl<P: Peek> Peek for &mut P {
    fn peek(&self) -> Option<Self::Item> {
        (**self).peek()
    }
}

impl Peek for std::str::Chars<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.clone().next()
    }
}

#[cfg(test)]
mod tests {
    use super::Peek;

    #[test]
    fn eat_matching_char() {
        let mut chars = "->".chars();
        assert!(!chars.eat('>'));
        assert!(chars.eat('-'));
        assert!(chars.eat('>'));
        assert!(chars.at_end());
    }

    #[test]
    fn eat_while_stops_at_mismatch() {
        let mut chars = "123abc".chars();
        assert_eq!(chars.eat_while(char::is_ascii_digit), 3);
        assert_eq!(chars.as_str(), "abc");
    }
}
