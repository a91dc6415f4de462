use super::VoicePhrases;
use super::VoiceState;

#[test]
fn it_has_eight_phrases() {
    assert_eq!(VoicePhrases::all().len(), 8);
}

#[test]
fn it_chooses_each_phrase_by_index() {
    for (idx, phrase) in VoicePhrases::all().iter().enumerate() {
        assert_eq!(VoicePhrases::choose(idx), *phrase);
    }
}

#[test]
fn it_wraps_out_of_range_indexes() {
    assert_eq!(VoicePhrases::choose(8), VoicePhrases::all()[0]);
    assert_eq!(VoicePhrases::choose(17), VoicePhrases::all()[1]);
}

#[test]
fn it_defaults_to_off() {
    let state = VoiceState::default();
    assert!(state.is_off());
    assert!(!state.is_recording());
}
