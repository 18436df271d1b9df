pub(crate) trait UserInterface {
    fn print(&self, message: String);
}

#[derive(Default)]
pub(crate) struct Console {}

impl UserInterface for Console {
    fn print(&self, message: String) {
        println!("{message}");
    }
}

#[cfg(test)]
pub(crate) mod util {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        message: RefCell<Option<Vec<String>>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            // Allows for print() to be called many times, concatenating the messages.
            let mut output = self.message.borrow_mut();

            if output.is_some() {
                (*output).as_mut().unwrap().push(message);
            } else {
                (*output).replace(vec![message]);
            }
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(&self) -> Option<String> {
            self.message
                .borrow_mut()
                .take()
                .map(|messages| messages.join("\n"))
        }

        pub(crate) fn consume_message(&self) -> String {
            self.consume().expect("no messages were printed")
        }
    }

    // Lets a test keep a handle on the interface while the parser owns the `Box<dyn ..>`.
    impl UserInterface for std::rc::Rc<InMemoryInterface> {
        fn print(&self, message: String) {
            self.as_ref().print(message);
        }
    }
}
