//! Help text for the interactive prompt: `help` alone lists everything,
//! `help <command>` shows details for one command.

fn show_general_help() -> String {
    let text = r#"ChicAI - Available Commands:

  help [command]
    Show this list, or details on one command.

  occasions
    List the occasions you can dress for.

  occasion <id>
    Pick an occasion (casual, office, party, date-night, wedding, sport).

  context <text> | context clear
    Extra notes for the stylist, e.g. "outdoor venue, I hate heels".

  weather
    Look up the current weather again.

  recommend
    Generate an outfit for the selected occasion.

  upload <path>
    Use an image file as your photo.

  camera
    Enter capture mode (snap, retake, confirm, close).

  clear
    Remove the current photo.

  tryon
    Generate an image of you wearing the recommended outfit.

  save <path>
    Write the try-on image to a file.

  show
    Redraw everything.

  dismiss
    Hide the last error message.

  quit
    Leave.
"#;
    text.to_string()
}

fn show_camera_help() -> String {
    r#"camera
  Opens the front camera and shows the live preview.
  While in capture mode:
    snap     freeze the current frame
    retake   discard the frame and go back to the preview
    confirm  use the frozen frame as your photo and close the camera
    close    leave without a photo
  The camera is released whichever way you leave."#
        .to_string()
}

fn show_tryon_help() -> String {
    r#"tryon
  Needs both a photo and a recommendation. Sends the photo together with
  the outfit ("category: item, ...") to the image model. Replacing the photo
  or the outfit discards the previous result."#
        .to_string()
}

fn show_context_help() -> String {
    r#"context <text>
  Free text passed to the stylist with the next recommendation.
context clear
  Forget it."#
        .to_string()
}

/// Help for `cmd`, or the general list when `cmd` is unknown or absent.
pub fn show_command_help(cmd: Option<&str>) -> String {
    match cmd.map(|c| c.to_lowercase()).as_deref() {
        Some("camera") | Some("snap") | Some("retake") | Some("confirm") => show_camera_help(),
        Some("tryon") | Some("try-on") => show_tryon_help(),
        Some("context") => show_context_help(),
        _ => show_general_help(),
    }
}
