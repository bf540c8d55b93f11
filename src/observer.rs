use crate::event::Event;
use crate::filter::FilterError;
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Receives log events
///
/// Observers may annotate the event they are given (for example by appending
/// to its trace list) before handing it further down a pipeline.
pub trait Observer: Send + Sync {
    /// Name recorded in trace entries
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn observe(&self, event: &mut Event) -> Result<(), FilterError>;
}

impl<T: Observer + ?Sized> Observer for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn observe(&self, event: &mut Event) -> Result<(), FilterError> {
        (**self).observe(event)
    }
}

impl<T: Observer + ?Sized> Observer for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn observe(&self, event: &mut Event) -> Result<(), FilterError> {
        (**self).observe(event)
    }
}

/// Writes each observed event as one line of compact JSON
pub struct JsonLinesObserver<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Flush the underlying writer
    pub fn flush(&self) -> Result<(), FilterError> {
        self.writer.lock().flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Observer for JsonLinesObserver<W> {
    fn name(&self) -> &str {
        "json-lines"
    }

    fn observe(&self, event: &mut Event) -> Result<(), FilterError> {
        let mut writer = self.writer.lock();
        serde_json::to_writer(&mut *writer, event).map_err(std::io::Error::from)?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Adapts a closure into a named [`Observer`]
pub struct FnObserver<F> {
    name: String,
    f: F,
}

impl<F> FnObserver<F>
where
    F: Fn(&mut Event) + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Observer for FnObserver<F>
where
    F: Fn(&mut Event) + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn observe(&self, event: &mut Event) -> Result<(), FilterError> {
        (self.f)(event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_lines_writes_one_line_per_event() {
        let observer = JsonLinesObserver::new(Vec::new());
        let mut first = Event::new();
        first.insert("n".to_string(), json!(1));
        let mut second = Event::new();
        second.insert("n".to_string(), json!(2));

        observer.observe(&mut first).unwrap();
        observer.observe(&mut second).unwrap();

        let out = String::from_utf8(observer.into_inner()).unwrap();
        assert_eq!(out, "{\"n\":1}\n{\"n\":2}\n");
    }

    #[test]
    fn test_fn_observer_uses_given_name() {
        let observer = FnObserver::new("sink", |_: &mut Event| {});
        assert_eq!(observer.name(), "sink");
    }
}
