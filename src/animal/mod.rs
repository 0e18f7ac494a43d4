/*!
Animals and pets

`Dog` and `Cat` are the concrete animals. A `Pet` wraps any animal together
with a display name and answers for it by delegation.
*/

use std::fmt;
use std::io;

use crate::named::Named;
use crate::output::LineSink;

/// Something that can make a noise and say what it is
pub trait Animal {
    /// Write this animal's sound as one line
    fn speak(&self, sink: &mut dyn LineSink) -> io::Result<()>;

    fn animal_name(&self) -> &str;
}

impl Animal for Box<dyn Animal> {
    fn speak(&self, sink: &mut dyn LineSink) -> io::Result<()> {
        self.as_ref().speak(sink)
    }

    fn animal_name(&self) -> &str {
        self.as_ref().animal_name()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dog;

impl Animal for Dog {
    fn speak(&self, sink: &mut dyn LineSink) -> io::Result<()> {
        sink.write_line("Woof!")
    }

    fn animal_name(&self) -> &str {
        "Dog"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cat;

impl Animal for Cat {
    fn speak(&self, sink: &mut dyn LineSink) -> io::Result<()> {
        sink.write_line("Meow")
    }

    fn animal_name(&self) -> &str {
        "Cat"
    }
}

/// An animal with a name of its own
pub struct Pet {
    animal: Box<dyn Animal>,
    name: String,
}

impl Pet {
    pub fn new(animal: impl Animal + 'static, name: impl Into<String>) -> Self {
        Pet {
            animal: Box::new(animal),
            name: name.into(),
        }
    }

    /// The wrapped animal; fixed for the pet's lifetime
    pub fn animal(&self) -> &dyn Animal {
        self.animal.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl Animal for Pet {
    fn speak(&self, sink: &mut dyn LineSink) -> io::Result<()> {
        self.animal.speak(sink)
    }

    fn animal_name(&self) -> &str {
        self.animal.animal_name()
    }
}

impl Named for Pet {
    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pet")
            .field("animal", &self.animal.animal_name())
            .field("name", &self.name)
            .finish()
    }
}
