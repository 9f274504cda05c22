pub const TIPS: [&str; 5] = [
    "Switch off lights and fans when not in the room.",
    "Use LED bulbs — they consume less power.",
    "Unplug chargers and appliances when idle.",
    "Run washing machine on full load.",
    "Keep AC filters clean for efficient cooling.",
];
