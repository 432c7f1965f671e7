use std::env;
use std::path::Path;

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").unwrap_or_default() != "windows" {
        return;
    }

    let mut res = winres::WindowsResource::new();

    let icon_path = "../../assets/app.ico";
    println!("cargo:rerun-if-changed={}", icon_path);

    if Path::new(icon_path).exists() {
        res.set_icon(icon_path);
    } else {
        println!("cargo:warning=Icon not found at {}, using default", icon_path);
    }

    res.set("FileDescription", "Power BI Governance Solution");
    res.set("ProductName", "Power BI Governance Solution");
    res.set("CompanyName", "ShineeKun");
    res.set("FileVersion", "1.0.0.0");
    res.set("ProductVersion", "1.0.0.0");
    res.set("OriginalFilename", "gl-gui.exe");

    res.set_manifest(
        r#"
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
  <assemblyIdentity type="win32" name="PowerBIGovernance.Launcher" version="1.0.0.0" processorArchitecture="*" />

  <trustInfo xmlns="urn:schemas-microsoft-com:asm.v3">
    <security>
      <requestedPrivileges>
        <requestedExecutionLevel level="asInvoker" uiAccess="false" />
      </requestedPrivileges>
    </security>
  </trustInfo>

  <application xmlns="urn:schemas-microsoft-com:asm.v3">
    <windowsSettings>
      <dpiAwareness xmlns="http://schemas.microsoft.com/SMI/2016/WindowsSettings">PerMonitorV2</dpiAwareness>
    </windowsSettings>
  </application>
</assembly>
"#,
    );

    if let Err(e) = res.compile() {
        panic!("Resource Compile Error: {}", e);
    }
}
