/// Where the entry guard looks for the runtime context.
pub trait ContextSource {
    fn lookup(&self, key: &str) -> Option<String>;
}

pub trait NodeSettings {
    fn node_name(&self) -> &str;
    fn context_var(&self) -> &str;
}

impl<T: ContextSource + ?Sized> ContextSource for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

impl<T: NodeSettings + ?Sized> NodeSettings for &T {
    fn node_name(&self) -> &str {
        (**self).node_name()
    }

    fn context_var(&self) -> &str {
        (**self).context_var()
    }
}
