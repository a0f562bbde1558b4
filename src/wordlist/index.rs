/// The seam external callers consume: benches, the file-backed wordlist
/// and the CLI all talk to the tree through this trait and never touch
/// node internals.
pub trait Index {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;
    fn contains_prefix(&self, prefix: &str) -> bool;
    fn remove(&mut self, word: &str) -> bool;

    fn add_all<'a, I>(&mut self, items: I)
    where
        I: Iterator<Item = &'a str>,
    {
        items.for_each(|x| self.add(x));
    }
}
