use teloxide::types::{FileId, Message};

/// Attachment kinds the bot converts. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Voice,
    Video,
    VideoNote,
    Audio,
}

/// A matched attachment: its kind and the file handle to fetch it by.
#[derive(Debug, Clone)]
pub struct MediaSource {
    pub kind: MediaKind,
    pub file_id: FileId,
}

/// Matches a message against the supported attachment whitelist.
///
/// Precedence when more than one field is populated:
/// voice > video > video_note > audio.
pub fn classify(message: &Message) -> Option<MediaSource> {
    if let Some(voice) = message.voice() {
        Some(MediaSource {
            kind: MediaKind::Voice,
            file_id: voice.file.id.clone(),
        })
    } else if let Some(video) = message.video() {
        Some(MediaSource {
            kind: MediaKind::Video,
            file_id: video.file.id.clone(),
        })
    } else if let Some(video_note) = message.video_note() {
        Some(MediaSource {
            kind: MediaKind::VideoNote,
            file_id: video_note.file.id.clone(),
        })
    } else if let Some(audio) = message.audio() {
        Some(MediaSource {
            kind: MediaKind::Audio,
            file_id: audio.file.id.clone(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Builds a Message from raw Bot API JSON, the same shape the update
    // listener deserializes.
    fn message_with(extra: serde_json::Value) -> Message {
        let mut raw = json!({
            "message_id": 1,
            "date": 1,
            "chat": {"id": 10, "type": "private", "first_name": "Test"},
            "from": {"id": 20, "is_bot": false, "first_name": "Test"},
        });
        raw.as_object_mut()
            .unwrap()
            .extend(extra.as_object().unwrap().clone());
        serde_json::from_value(raw).expect("valid Bot API message")
    }

    #[test]
    fn voice_matches() {
        let msg = message_with(json!({
            "voice": {"file_id": "voice-1", "file_unique_id": "u1", "duration": 3, "mime_type": "audio/ogg"},
        }));
        let source = classify(&msg).expect("voice should match");
        assert_eq!(source.kind, MediaKind::Voice);
        assert_eq!(source.file_id.0, "voice-1");
    }

    #[test]
    fn video_matches() {
        let msg = message_with(json!({
            "video": {
                "file_id": "video-1",
                "file_unique_id": "u2",
                "width": 640,
                "height": 480,
                "duration": 5,
                "mime_type": "video/mp4",
            },
        }));
        let source = classify(&msg).expect("video should match");
        assert_eq!(source.kind, MediaKind::Video);
        assert_eq!(source.file_id.0, "video-1");
    }

    #[test]
    fn video_note_matches() {
        let msg = message_with(json!({
            "video_note": {
                "file_id": "note-1",
                "file_unique_id": "u3",
                "length": 240,
                "duration": 4,
            },
        }));
        let source = classify(&msg).expect("video note should match");
        assert_eq!(source.kind, MediaKind::VideoNote);
        assert_eq!(source.file_id.0, "note-1");
    }

    #[test]
    fn audio_matches() {
        let msg = message_with(json!({
            "audio": {"file_id": "audio-1", "file_unique_id": "u4", "duration": 60, "mime_type": "audio/mpeg"},
        }));
        let source = classify(&msg).expect("audio should match");
        assert_eq!(source.kind, MediaKind::Audio);
        assert_eq!(source.file_id.0, "audio-1");
    }

    #[test]
    fn text_does_not_match() {
        let msg = message_with(json!({"text": "hello"}));
        assert!(classify(&msg).is_none());
    }

    #[test]
    fn photo_does_not_match() {
        let msg = message_with(json!({
            "photo": [
                {"file_id": "photo-1", "file_unique_id": "u5", "width": 90, "height": 90},
            ],
        }));
        assert!(classify(&msg).is_none());
    }

    #[test]
    fn document_does_not_match() {
        let msg = message_with(json!({
            "document": {"file_id": "doc-1", "file_unique_id": "u6"},
        }));
        assert!(classify(&msg).is_none());
    }
}
