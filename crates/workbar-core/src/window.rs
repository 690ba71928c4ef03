use crate::Rect;

/// A boxed error type for fallible platform calls.
///
/// Engine failures never surface through this type: they degrade to
/// "skip this pass". It is used for setup steps such as creating the
/// overlay window or starting the event loop.
pub type WindowResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Platform-agnostic read access to a top-level window.
pub trait Window {
    /// Returns the window title.
    fn title(&self) -> WindowResult<String>;

    /// Returns the window bounding rectangle in screen coordinates.
    fn rect(&self) -> WindowResult<Rect>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed {
        title: &'static str,
        rect: Rect,
    }

    impl Window for Fixed {
        fn title(&self) -> WindowResult<String> {
            Ok(self.title.to_owned())
        }

        fn rect(&self) -> WindowResult<Rect> {
            Ok(self.rect)
        }
    }

    #[test]
    fn trait_objects_expose_title_and_rect() {
        // Arrange
        let window: Box<dyn Window> = Box::new(Fixed {
            title: "Inbox",
            rect: Rect::from_ltrb(0, 1040, 1920, 1080),
        });

        // Act
        let title = window.title().unwrap();
        let rect = window.rect().unwrap();

        // Assert
        assert_eq!(title, "Inbox");
        assert_eq!(rect.height, 40);
    }
}
