// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The page's documentation index, in curatorial order.
//!
//! Order matters: equal scores rank by position here, so within each section
//! the most commonly needed entries come first.

use crate::types::DocEntry;

const USER_GUIDE: &str = "https://ajarsm.github.io/kingkiosk/docs/KINGKIOSK_USER_GUIDE.html";
const MQTT_REFERENCE: &str = "https://ajarsm.github.io/kingkiosk/docs/MQTT_WIDGET_REFERENCE.html";
const WIDGET_SDK: &str = "https://ajarsm.github.io/kingkiosk/docs/CUSTOM_WIDGET_SDK.html";

/// `(title, description, section, url, tags)`
type Row = (&'static str, &'static str, &'static str, &'static str, &'static str);

const ROWS: &[Row] = &[
    // User Guide
    (
        "Getting Started",
        "Install KingKiosk, connect to MQTT, and display your first widget.",
        "User Guide",
        USER_GUIDE,
        "install setup start begin first configure connection",
    ),
    (
        "Multi-Window System",
        "Floating and tiled window modes, drag/resize, z-index layering.",
        "User Guide",
        USER_GUIDE,
        "windows tiling floating layout grid split resize drag drop multi",
    ),
    (
        "Screen Presets",
        "Save, name, and recall entire window layouts with one command.",
        "User Guide",
        USER_GUIDE,
        "presets save layout recall snapshot restore screen state morning night",
    ),
    (
        "Scheduling",
        "Automatically switch screen presets by time of day and day of week.",
        "User Guide",
        USER_GUIDE,
        "schedule timer time day week automatic cron",
    ),
    (
        "Kiosk Mode",
        "Lock down the display: disable navigation, hide status bar, auto-restart.",
        "User Guide",
        USER_GUIDE,
        "kiosk lockdown lock device admin guided access fullscreen",
    ),
    (
        "Platform Setup — Android",
        "Device Owner mode, kiosk lockdown, foreground media service.",
        "User Guide",
        USER_GUIDE,
        "android tablet phone samsung fire",
    ),
    (
        "Platform Setup — iOS / iPadOS",
        "Guided Access, WidgetKit home screen widgets, permissions.",
        "User Guide",
        USER_GUIDE,
        "ios ipad iphone apple widgetkit guided access",
    ),
    (
        "Platform Setup — Apple TV",
        "Native tvOS app with Siri Remote, Remote Browser for full web.",
        "User Guide",
        USER_GUIDE,
        "apple tv tvos siri remote television big screen",
    ),
    (
        "Platform Setup — Windows",
        "MSIX packaging, two-tier kiosk lockdown, InAppWebView.",
        "User Guide",
        USER_GUIDE,
        "windows pc desktop msix",
    ),
    (
        "Platform Setup — macOS",
        "Fullscreen kiosk, dock hiding, accessibility permissions.",
        "User Guide",
        USER_GUIDE,
        "macos mac desktop osx",
    ),
    (
        "Platform Setup — Linux",
        "Raspberry Pi, Snap, Flatpak, dedicated display hardware.",
        "User Guide",
        USER_GUIDE,
        "linux raspberry pi ubuntu snap flatpak embedded",
    ),
    (
        "Home Assistant Integration",
        "Auto-discovery, sensor entities, camera entity, Alarmo panel.",
        "User Guide",
        USER_GUIDE,
        "home assistant ha discovery sensors camera alarmo automation",
    ),
    (
        "MQTT Connection Settings",
        "Configure broker host, port, username, password, TLS.",
        "User Guide",
        USER_GUIDE,
        "mqtt broker host port username password tls connect settings",
    ),

    // MQTT Reference
    (
        "Topic Structure",
        "kingkiosk/{device_id}/system/cmd, element/{id}/cmd, status, sensors.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "topic structure device id system element cmd status sensors publish subscribe",
    ),
    (
        "Command Envelope Format",
        "JSON envelope with command, payload, timestamp, and HMAC signature.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "envelope json format command payload timestamp signature hmac sha256",
    ),
    (
        "add_window",
        "Add a new widget window: type, url, position, size, config.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "add_window add window create widget new tile type",
    ),
    (
        "remove_window",
        "Remove a window by ID.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "remove_window remove delete close window tile",
    ),
    (
        "arrange_windows",
        "Set layout mode: grid, columns, rows, floating.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "arrange_windows arrange layout grid columns rows mode tiling",
    ),
    (
        "set_brightness",
        "Control screen brightness (0.0–1.0).",
        "MQTT Reference",
        MQTT_REFERENCE,
        "set_brightness brightness screen dim display",
    ),
    (
        "set_volume",
        "Set audio volume (0.0–1.0).",
        "MQTT Reference",
        MQTT_REFERENCE,
        "set_volume volume audio sound mute",
    ),
    (
        "tts (Text-to-Speech)",
        "Speak text aloud with configurable voice and language.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "tts text to speech speak voice language piper",
    ),
    (
        "navigate",
        "Navigate the app to a specific route or screen.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "navigate route screen page go",
    ),
    (
        "screenshot",
        "Capture a screenshot and publish it as a camera entity.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "screenshot capture image camera",
    ),
    (
        "restart / refresh",
        "Restart the app or refresh the current view.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "restart refresh reload reboot",
    ),
    (
        "notification",
        "Display an on-screen notification with title and body.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "notification alert toast message popup",
    ),
    (
        "save_screen_state",
        "Save the current layout as a named preset.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "save_screen_state save preset layout snapshot",
    ),
    (
        "load_screen_state",
        "Load and apply a saved screen preset by name.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "load_screen_state load preset apply restore layout",
    ),
    (
        "set_schedule",
        "Configure time-based schedule entries for automatic preset switching.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "set_schedule schedule time automatic preset cron timer",
    ),
    (
        "WebView Commands",
        "navigate, refresh, execute_js, zoom, back, forward.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "webview web browser navigate url refresh javascript execute js",
    ),
    (
        "Media Player Commands",
        "play, pause, stop, seek, set_source, set_volume.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "media player play pause stop seek source volume video audio",
    ),
    (
        "Carousel Commands",
        "next, previous, go_to, set_interval, set_images.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "carousel slideshow next previous images interval slides rotate",
    ),
    (
        "Gauge Commands",
        "set_value, set_config, set_range with min/max.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "gauge radial linear semicircle value range min max",
    ),
    (
        "Chart Commands",
        "set_data, add_point, set_config for line, bar, pie charts.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "chart line bar pie graph data point series",
    ),
    (
        "Camera Widget",
        "RTSP, WebRTC, WHEP camera streams with talkback support.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "camera rtsp webrtc whep stream feed video talkback",
    ),
    (
        "Clock Widget",
        "Analog and digital modes, timezone, 12/24-hour format.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "clock analog digital time timezone format",
    ),
    (
        "Weather Widget",
        "OpenWeather data with configurable location and units.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "weather temperature forecast openweather location units",
    ),
    (
        "Calendar Widget",
        "MQTT-synced events with reminders and recurring entries.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "calendar events schedule reminders recurring",
    ),
    (
        "Intercom Widget",
        "WebRTC audio/video intercom with push-to-talk and broadcast.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "intercom webrtc audio video broadcast push to talk mediasoup",
    ),
    (
        "Canvas Widget",
        "Declarative graphics: shapes, text, images, animations via MQTT.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "canvas draw graphics shapes text images animation declarative",
    ),
    (
        "Animated Text Widget",
        "Typewriter, neon, marquee, bounce, fade text effects.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "animated text typewriter neon marquee bounce fade effects",
    ),
    (
        "Map Widget",
        "OpenStreetMap with markers, zoom, and center control.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "map openstreetmap markers zoom location gps",
    ),
    (
        "Audio Visualizer",
        "Real-time FFT visualization of audio input.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "audio visualizer fft music spectrum frequency bars",
    ),
    (
        "LED Panel Widget",
        "Scrolling LED-style text display with color control.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "led panel scrolling text ticker display",
    ),
    (
        "YouTube Widget",
        "Embedded YouTube playback with MQTT transport controls.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "youtube video play embed stream",
    ),
    (
        "PDF Viewer Widget",
        "Display PDF documents with page navigation via MQTT.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "pdf viewer document page navigation",
    ),
    (
        "DLNA Player Widget",
        "Discover and play media from DLNA/UPnP servers.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "dlna upnp media player discover cast stream",
    ),
    (
        "Alarmo Widget",
        "Home Assistant Alarmo security panel with PIN control.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "alarmo alarm security panel pin arm disarm home assistant",
    ),
    (
        "Game Widget",
        "Built-in games: Missile Command, and more.",
        "MQTT Reference",
        MQTT_REFERENCE,
        "game games missile command play",
    ),

    // Custom widget SDK
    (
        "Custom Widget SDK Overview",
        "Build HTML/JS widgets with full KingKiosk platform access.",
        "Widget SDK",
        WIDGET_SDK,
        "custom widget sdk html javascript build create develop",
    ),
    (
        "window.KingKiosk API",
        "The JavaScript bridge: onCommand, sendCommand, publishTelemetry.",
        "Widget SDK",
        WIDGET_SDK,
        "kingkiosk api bridge javascript window oncommand sendcommand",
    ),
    (
        "onCommand()",
        "Receive MQTT commands targeted at your custom widget.",
        "Widget SDK",
        WIDGET_SDK,
        "oncommand receive command handler callback",
    ),
    (
        "sendCommand()",
        "Publish events and control other widgets from your widget.",
        "Widget SDK",
        WIDGET_SDK,
        "sendcommand publish send event control",
    ),
    (
        "publishTelemetry()",
        "Share sensor data with the platform and Home Assistant.",
        "Widget SDK",
        WIDGET_SDK,
        "publishtelemetry telemetry sensor data readings",
    ),
    (
        "storage.get/set()",
        "Persistent key-value storage across app restarts.",
        "Widget SDK",
        WIDGET_SDK,
        "storage get set persistent key value save load",
    ),
    (
        "getWidgetInfo()",
        "Get widget ID, platform, device info, and screen dimensions.",
        "Widget SDK",
        WIDGET_SDK,
        "getwidgetinfo widget id platform device info screen",
    ),

    // Feature Server (anchors on this page)
    (
        "Remote Browser",
        "Server-side Chromium rendering streamed via WebRTC to any device.",
        "Feature Server",
        "#server",
        "remote browser chromium webrtc server side rendering apple tv",
    ),
    (
        "WebRTC Intercom",
        "MediaSoup SFU for low-latency audio/video broadcast between kiosks.",
        "Feature Server",
        "#server",
        "intercom webrtc mediasoup sfu broadcast audio video",
    ),
    (
        "AI Vision",
        "Real-time object detection, facial recognition, audio classification.",
        "Feature Server",
        "#server",
        "ai vision object detection facial recognition yolo inference camera",
    ),
    (
        "Speech Services (TTS/STT)",
        "Piper TTS (100+ voices), Whisper STT. All local, no cloud.",
        "Feature Server",
        "#server",
        "tts stt speech text voice piper whisper transcription",
    ),
    (
        "Camera Management",
        "RTSP/RTMP/HLS ingest, AI alerts, RTSP export to go2rtc.",
        "Feature Server",
        "#server",
        "camera management rtsp rtmp hls ingest export go2rtc frigate",
    ),
    (
        "RTSP Camera Export",
        "Stream tablet/device cameras to Home Assistant via go2rtc.",
        "Feature Server",
        "#server",
        "rtsp export go2rtc frigate home assistant camera stream",
    ),

    // Security (anchors on this page)
    (
        "HMAC-SHA256 Command Signing",
        "Cryptographically sign every MQTT command for tamper protection.",
        "Security",
        "#security",
        "hmac sha256 signing security signature crypto",
    ),
    (
        "TLS / DTLS Encryption",
        "MQTT over TLS, WebRTC DTLS-SRTP for all media streams.",
        "Security",
        "#security",
        "tls dtls encryption ssl secure mqtt webrtc",
    ),
    (
        "Kiosk Lockdown",
        "Device Owner (Android), Guided Access (iOS), fullscreen kiosk modes.",
        "Security",
        "#security",
        "kiosk lockdown device owner guided access pin lock",
    ),
];

/// Materialize the built-in rows as owned entries.
pub(crate) fn entries() -> Vec<DocEntry> {
    ROWS.iter()
        .map(|&(title, description, section, url, tags)| {
            DocEntry::new(title, description, section, url, tags)
        })
        .collect()
}
